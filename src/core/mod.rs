//! Core scoreboard types and logic.
//!
//! This module contains the pure functional core:
//! - The `GameState` value and its limits
//! - Events and the pure transition functions that apply them
//! - The bounded undo history
//!
//! Nothing in here performs I/O. The session in [`crate::session`] wires the
//! pieces together.

mod event;
mod game;
mod history;
mod state;
pub mod transition;

pub use event::Event;
pub use game::{
    GameState, ParseTeamError, Team, DEFAULT_AWAY_NAME, DEFAULT_HOME_NAME, MAX_BALLS, MAX_FOULS,
    MAX_OUTS, MAX_STRIKES,
};
pub use history::{HistoryError, Snapshot, UndoHistory, DEFAULT_HISTORY_CAPACITY};
pub use state::State;

//! Scoreboard: a pure functional count-and-score engine for bat-and-ball games
//!
//! The board is a plain value. Every scorekeeping event is a pure function
//! from the previous board to the next one, and the session keeps a bounded
//! stack of earlier boards for undo.
//!
//! # Core Concepts
//!
//! - **GameState**: inning, half, scores, team names and the count
//! - **Transitions**: pure functions, one per event, with the walk /
//!   strikeout / outs cascades built in
//! - **History**: most-recent-first undo snapshots, 20 by default
//!
//! # Example
//!
//! ```rust
//! use scoreboard::core::Team;
//! use scoreboard::session::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! board.strike();
//! board.strike();
//! board.strike();
//! assert_eq!(board.current().outs, 1);
//!
//! board.adjust_score(Team::Away, 2);
//! board.rename_team(Team::Away, "Tigers");
//!
//! board.undo();
//! assert_eq!(board.current().away_score, 0);
//! assert_eq!(board.current().away_name, "AWAY");
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod core;
pub mod offline;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use builder::{BuildError, ScoreboardBuilder};
pub use config::ScoreboardConfig;
pub use core::{Event, GameState, State, Team, UndoHistory};
pub use session::Scoreboard;

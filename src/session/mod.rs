//! The scorekeeping session: current board plus its undo history.
//!
//! This is the imperative shell around the pure core. Every undoable event
//! takes a snapshot of the current board, runs the transition and replaces
//! the board wholesale.

mod scoreboard;

pub use scoreboard::Scoreboard;

//! Builder API for configuring scoreboard sessions.

pub mod error;
pub mod scoreboard;

pub use error::BuildError;
pub use scoreboard::ScoreboardBuilder;

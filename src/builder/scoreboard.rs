//! Builder for constructing scoreboard sessions.

use crate::builder::error::BuildError;
use crate::config::ScoreboardConfig;
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::session::Scoreboard;

/// Builder for constructing scoreboard sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use scoreboard::builder::ScoreboardBuilder;
///
/// let board = ScoreboardBuilder::new().history_capacity(5).build().unwrap();
/// assert_eq!(board.history().capacity(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct ScoreboardBuilder {
    history_capacity: usize,
}

impl ScoreboardBuilder {
    /// Create a new builder with the default undo depth.
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Start from loaded configuration.
    pub fn from_config(config: &ScoreboardConfig) -> Self {
        Self::new().history_capacity(config.history_capacity)
    }

    /// Set how many undo snapshots are kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the session.
    /// Returns an error if the history could never hold a snapshot.
    pub fn build(self) -> Result<Scoreboard, BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }

        Ok(Scoreboard::with_history_capacity(self.history_capacity))
    }
}

impl Default for ScoreboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

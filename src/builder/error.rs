//! Build errors for the scoreboard builder.

use thiserror::Error;

/// Errors that can occur when building a scoreboard session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("History capacity must be at least 1. Call .history_capacity(n) with n > 0")]
    ZeroHistoryCapacity,
}

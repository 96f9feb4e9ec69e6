//! Offline cache error types.

use thiserror::Error;

/// Errors that can occur while installing or serving from the offline cache
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OfflineError {
    /// The network could not be reached for this request
    #[error("Network request for '{url}' failed: {reason}")]
    Network { url: String, reason: String },

    /// An asset answered with a non-success status while pre-caching
    #[error("Pre-cache of '{url}' returned status {status}")]
    BadStatus { url: String, status: u16 },

    /// The network failed and no cached copy exists
    #[error("No cached response for '{url}'")]
    NotCached { url: String },

    /// A writer panicked while holding the cache storage lock
    #[error("Cache storage lock poisoned")]
    StoragePoisoned,
}

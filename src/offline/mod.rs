//! Offline caching for the static app shell, as stillwater effects.
//!
//! The scoreboard core never depends on this module. It describes how the
//! static UI that embeds the core stays available without a network:
//!
//! - **install**: pre-cache a fixed asset list under a versioned cache name
//! - **fetch**: network first, falling back to the cache
//! - **activate**: purge caches from older versions
//!
//! Network access is injected through the [`Network`] trait so the policy can
//! run against a stub in tests.

mod cache;
pub mod error;
mod worker;

pub use cache::{CacheStorage, Request, RequestMode, Response};
pub use error::OfflineError;
pub use worker::{Network, OfflineEnv, OfflineWorker};

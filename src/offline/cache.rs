//! Requests, responses and the named cache store.

use crate::offline::error::OfflineError;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// How a request was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestMode {
    /// A page navigation; falls back to the offline page.
    Navigate,
    /// Any other request; falls back to a cached copy of the same URL.
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Other,
        }
    }

    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

type Caches = BTreeMap<String, BTreeMap<String, Response>>;

/// Named caches of responses keyed by request URL.
///
/// Shared between effects through an `Arc`; the lock keeps the offline
/// environment `Send + Sync`.
#[derive(Debug, Default)]
pub struct CacheStorage {
    caches: RwLock<Caches>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Caches>, OfflineError> {
        self.caches.read().map_err(|_| OfflineError::StoragePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Caches>, OfflineError> {
        self.caches.write().map_err(|_| OfflineError::StoragePoisoned)
    }

    /// Store every response under `cache_name`, creating the cache if needed.
    pub fn put_all(
        &self,
        cache_name: &str,
        entries: impl IntoIterator<Item = Response>,
    ) -> Result<(), OfflineError> {
        let mut caches = self.write()?;
        let cache = caches.entry(cache_name.to_string()).or_default();
        for response in entries {
            cache.insert(response.url.clone(), response);
        }
        Ok(())
    }

    /// Look up `url` in one cache.
    pub fn match_in(&self, cache_name: &str, url: &str) -> Result<Option<Response>, OfflineError> {
        Ok(self
            .read()?
            .get(cache_name)
            .and_then(|cache| cache.get(url))
            .cloned())
    }

    /// Look up `url` across all caches, first hit in cache-name order.
    pub fn match_any(&self, url: &str) -> Result<Option<Response>, OfflineError> {
        Ok(self
            .read()?
            .values()
            .find_map(|cache| cache.get(url))
            .cloned())
    }

    /// Names of all caches, sorted.
    pub fn keys(&self) -> Result<Vec<String>, OfflineError> {
        Ok(self.read()?.keys().cloned().collect())
    }

    /// Remove a cache; returns whether it existed.
    pub fn delete(&self, cache_name: &str) -> Result<bool, OfflineError> {
        Ok(self.write()?.remove(cache_name).is_some())
    }
}

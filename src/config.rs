//! Runtime configuration read from environment variables.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use std::env;

/// Default offline cache version name.
pub const DEFAULT_CACHE_NAME: &str = "scoreboard-shell-v1";
/// Page served to navigations when the network is unreachable.
pub const DEFAULT_OFFLINE_URL: &str = "./index.html";
/// Static assets stored when the offline worker installs.
pub const DEFAULT_PRECACHE: [&str; 5] = [
    "./",
    "./index.html",
    "./manifest.json",
    "./icon-192.png",
    "./icon-512.png",
];

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardConfig {
    /// Number of undo snapshots kept.
    pub history_capacity: usize,
    pub offline: OfflineConfig,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            offline: OfflineConfig::default(),
        }
    }
}

impl ScoreboardConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_HISTORY_CAPACITY` - Undo depth, at least 1 (default: 20)
    /// - `SCOREBOARD_CACHE_NAME` - Offline cache version name (default: `scoreboard-shell-v1`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SCOREBOARD_HISTORY_CAPACITY") {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.history_capacity = capacity,
                _ => tracing::warn!(
                    value = %raw,
                    "ignoring SCOREBOARD_HISTORY_CAPACITY, expected a positive integer"
                ),
            }
        }

        if let Some(name) = lookup("SCOREBOARD_CACHE_NAME") {
            if name.trim().is_empty() {
                tracing::warn!("ignoring empty SCOREBOARD_CACHE_NAME");
            } else {
                config.offline.cache_name = name;
            }
        }

        config
    }
}

/// Offline asset cache configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfflineConfig {
    /// Name of the current cache version; any other cache is purged on activate.
    pub cache_name: String,
    /// Cached page returned for failed navigations.
    pub offline_url: String,
    /// Assets fetched and stored on install.
    pub precache: Vec<String>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            offline_url: DEFAULT_OFFLINE_URL.to_string(),
            precache: DEFAULT_PRECACHE.iter().map(|url| url.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ScoreboardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ScoreboardConfig::default());
        assert_eq!(config.history_capacity, 20);
        assert_eq!(config.offline.cache_name, DEFAULT_CACHE_NAME);
        assert_eq!(config.offline.precache.len(), 5);
    }

    #[test]
    fn reads_history_capacity() {
        let config =
            ScoreboardConfig::from_lookup(lookup_from(&[("SCOREBOARD_HISTORY_CAPACITY", " 50 ")]));
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn ignores_invalid_history_capacity() {
        for raw in ["0", "-3", "lots"] {
            let config =
                ScoreboardConfig::from_lookup(lookup_from(&[("SCOREBOARD_HISTORY_CAPACITY", raw)]));
            assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        }
    }

    #[test]
    fn reads_cache_name() {
        let config =
            ScoreboardConfig::from_lookup(lookup_from(&[("SCOREBOARD_CACHE_NAME", "board-v2")]));
        assert_eq!(config.offline.cache_name, "board-v2");

        let blank = ScoreboardConfig::from_lookup(lookup_from(&[("SCOREBOARD_CACHE_NAME", "  ")]));
        assert_eq!(blank.offline.cache_name, DEFAULT_CACHE_NAME);
    }
}

//! Install, activate and fetch policies as effects.

use crate::config::OfflineConfig;
use crate::offline::cache::{CacheStorage, Request, Response};
use crate::offline::error::OfflineError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Access to the network. Returns `Err` only when the request could not be
/// made at all; HTTP error statuses come back as ordinary responses.
pub trait Network: Send + Sync {
    fn fetch(&self, request: &Request) -> Result<Response, OfflineError>;
}

/// Environment the offline effects run against.
#[derive(Clone)]
pub struct OfflineEnv {
    pub network: Arc<dyn Network>,
    pub storage: Arc<CacheStorage>,
}

impl OfflineEnv {
    pub fn new(network: Arc<dyn Network>) -> Self {
        Self {
            network,
            storage: Arc::new(CacheStorage::new()),
        }
    }

    pub fn with_storage(network: Arc<dyn Network>, storage: Arc<CacheStorage>) -> Self {
        Self { network, storage }
    }
}

/// Offline asset cache for the static app shell.
///
/// Each operation returns a boxed effect; nothing touches the network or the
/// cache until the effect is run against an [`OfflineEnv`].
#[derive(Clone, Debug)]
pub struct OfflineWorker {
    config: OfflineConfig,
}

impl OfflineWorker {
    pub fn new(config: OfflineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OfflineConfig {
        &self.config
    }

    /// Fetch the whole pre-cache list and store it under the current cache
    /// name. Any failure aborts the install before anything is stored.
    ///
    /// Yields the number of assets stored.
    pub fn install(&self) -> BoxedEffect<usize, OfflineError, OfflineEnv> {
        let cache_name = self.config.cache_name.clone();
        let precache = self.config.precache.clone();

        from_fn(move |env: &OfflineEnv| -> Result<usize, OfflineError> {
            let mut responses = Vec::with_capacity(precache.len());
            for url in &precache {
                let response = env.network.fetch(&Request::get(url.as_str()))?;
                if !response.is_ok() {
                    return Err(OfflineError::BadStatus {
                        url: url.clone(),
                        status: response.status,
                    });
                }
                responses.push(response);
            }

            let stored = responses.len();
            env.storage.put_all(&cache_name, responses)?;
            tracing::info!(cache = %cache_name, assets = stored, "offline cache installed");
            Ok(stored)
        })
        .boxed()
    }

    /// Delete every cache except the current one. Yields the purged names.
    pub fn activate(&self) -> BoxedEffect<Vec<String>, OfflineError, OfflineEnv> {
        let cache_name = self.config.cache_name.clone();

        from_fn(move |env: &OfflineEnv| -> Result<Vec<String>, OfflineError> {
            let mut purged = Vec::new();
            for key in env.storage.keys()? {
                if key != cache_name && env.storage.delete(&key)? {
                    purged.push(key);
                }
            }
            if !purged.is_empty() {
                tracing::info!(cache = %cache_name, purged = ?purged, "purged stale caches");
            }
            Ok(purged)
        })
        .boxed()
    }

    /// Network first. Navigations fall back to the cached offline page;
    /// other requests fall back to any cached copy of the same URL.
    pub fn fetch(&self, request: Request) -> BoxedEffect<Response, OfflineError, OfflineEnv> {
        let cache_name = self.config.cache_name.clone();
        let offline_url = self.config.offline_url.clone();

        from_fn(move |env: &OfflineEnv| -> Result<Response, OfflineError> {
            match env.network.fetch(&request) {
                Ok(response) => Ok(response),
                Err(err) => {
                    tracing::debug!(url = %request.url, error = %err, "network failed, trying cache");
                    let cached = if request.is_navigation() {
                        env.storage.match_in(&cache_name, &offline_url)?
                    } else {
                        env.storage.match_any(&request.url)?
                    };
                    cached.ok_or_else(|| OfflineError::NotCached {
                        url: request.url.clone(),
                    })
                }
            }
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use stillwater::effect::Effect;

    struct StubNetwork {
        online: AtomicBool,
        pages: HashMap<String, Response>,
    }

    impl StubNetwork {
        fn serving(urls: &[&str]) -> Self {
            let pages = urls
                .iter()
                .map(|url| (url.to_string(), Response::new(*url, 200, format!("live {url}"))))
                .collect();
            Self {
                online: AtomicBool::new(true),
                pages,
            }
        }

        fn go_offline(&self) {
            self.online.store(false, Ordering::SeqCst);
        }
    }

    impl Network for StubNetwork {
        fn fetch(&self, request: &Request) -> Result<Response, OfflineError> {
            if !self.online.load(Ordering::SeqCst) {
                return Err(OfflineError::Network {
                    url: request.url.clone(),
                    reason: "offline".to_string(),
                });
            }
            Ok(self
                .pages
                .get(&request.url)
                .cloned()
                .unwrap_or_else(|| Response::new(request.url.as_str(), 404, "")))
        }
    }

    fn shell_network() -> Arc<StubNetwork> {
        Arc::new(StubNetwork::serving(&[
            "./",
            "./index.html",
            "./manifest.json",
            "./icon-192.png",
            "./icon-512.png",
        ]))
    }

    #[tokio::test]
    async fn install_stores_every_precached_asset() {
        let network = shell_network();
        let env = OfflineEnv::new(network);
        let worker = OfflineWorker::new(OfflineConfig::default());

        let stored = worker.install().run(&env).await.unwrap();
        assert_eq!(stored, 5);

        let cache_name = &worker.config().cache_name;
        for url in &worker.config().precache {
            assert!(env.storage.match_in(cache_name, url).unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn install_is_all_or_nothing() {
        let network = Arc::new(StubNetwork::serving(&["./", "./index.html"]));
        let env = OfflineEnv::new(network);
        let worker = OfflineWorker::new(OfflineConfig::default());

        let result = worker.install().run(&env).await;
        assert_eq!(
            result,
            Err(OfflineError::BadStatus {
                url: "./manifest.json".to_string(),
                status: 404
            })
        );
        assert!(env.storage.keys().unwrap().is_empty());
    }

    #[tokio::test]
    async fn navigation_falls_back_to_offline_page() {
        let network = shell_network();
        let env = OfflineEnv::new(network.clone());
        let worker = OfflineWorker::new(OfflineConfig::default());
        worker.install().run(&env).await.unwrap();

        network.go_offline();
        let response = worker
            .fetch(Request::navigate("./scores/today"))
            .run(&env)
            .await
            .unwrap();
        assert_eq!(response.url, "./index.html");
    }

    #[tokio::test]
    async fn online_requests_prefer_network() {
        let network = shell_network();
        let env = OfflineEnv::new(network);
        let worker = OfflineWorker::new(OfflineConfig::default());

        let response = worker
            .fetch(Request::get("./manifest.json"))
            .run(&env)
            .await
            .unwrap();
        assert_eq!(response.body, b"live ./manifest.json".to_vec());

        let missing = worker.fetch(Request::get("./nope.js")).run(&env).await.unwrap();
        assert_eq!(missing.status, 404);
    }

    #[tokio::test]
    async fn asset_requests_fall_back_to_matching_url() {
        let network = shell_network();
        let env = OfflineEnv::new(network.clone());
        let worker = OfflineWorker::new(OfflineConfig::default());
        worker.install().run(&env).await.unwrap();

        network.go_offline();
        let icon = worker
            .fetch(Request::get("./icon-192.png"))
            .run(&env)
            .await
            .unwrap();
        assert_eq!(icon.url, "./icon-192.png");

        let missing = worker.fetch(Request::get("./bundle.js")).run(&env).await;
        assert_eq!(
            missing,
            Err(OfflineError::NotCached {
                url: "./bundle.js".to_string()
            })
        );
    }

    #[tokio::test]
    async fn offline_navigation_without_install_fails() {
        let network = shell_network();
        network.go_offline();
        let env = OfflineEnv::new(network);
        let worker = OfflineWorker::new(OfflineConfig::default());

        let result = worker.fetch(Request::navigate("./")).run(&env).await;
        assert!(matches!(result, Err(OfflineError::NotCached { .. })));
    }

    #[tokio::test]
    async fn activate_purges_other_versions() {
        let network = shell_network();
        let storage = Arc::new(CacheStorage::new());
        let env = OfflineEnv::with_storage(network, storage.clone());

        let old = OfflineWorker::new(OfflineConfig {
            cache_name: "scoreboard-shell-v0".to_string(),
            ..OfflineConfig::default()
        });
        old.install().run(&env).await.unwrap();

        let current = OfflineWorker::new(OfflineConfig::default());
        current.install().run(&env).await.unwrap();

        let purged = current.activate().run(&env).await.unwrap();
        assert_eq!(purged, vec!["scoreboard-shell-v0".to_string()]);
        assert_eq!(
            storage.keys().unwrap(),
            vec![current.config().cache_name.clone()]
        );

        let again = current.activate().run(&env).await.unwrap();
        assert!(again.is_empty());
    }
}

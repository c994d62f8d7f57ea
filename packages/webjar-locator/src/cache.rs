//! Process-lifetime cache of webjar loaders.
//!
//! Each artifact name maps to a once-cell. The map lock is only held long
//! enough to fetch or insert the cell; version probing runs outside it, so
//! lookups for different artifacts never wait on each other, and concurrent
//! first lookups of one artifact share a single probe.
//!
//! Entries are never evicted. The artifact set is fixed by what was packaged
//! at build time, so the map stays bounded.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

use crate::loader::Loader;
use crate::version::ArtifactVersionResolver;

type Slot = Arc<OnceCell<Arc<Loader>>>;

/// Get-or-create cache of one [`Loader`] per artifact name.
pub struct LoaderCache {
    resolver: ArtifactVersionResolver,
    loaders: RwLock<HashMap<String, Slot>>,
}

impl LoaderCache {
    pub fn new(resolver: ArtifactVersionResolver) -> Self {
        Self {
            resolver,
            loaders: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the loader for `artifact`, resolving it on first use.
    ///
    /// Unknown artifacts get a [`Loader::NotFound`] sentinel, which is cached
    /// like any other loader.
    pub async fn get_loader(&self, artifact: &str) -> Arc<Loader> {
        let slot = self.slot(artifact).await;
        let loader = slot.get_or_init(|| self.create_loader(artifact)).await;
        Arc::clone(loader)
    }

    /// Resolves every artifact in `artifacts` ahead of the first request.
    ///
    /// Returns how many of them resolved to a real loader.
    pub async fn preload<I, S>(&self, artifacts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found = 0;
        for artifact in artifacts {
            if self.get_loader(artifact.as_ref()).await.is_found() {
                found += 1;
            }
        }
        found
    }

    /// Number of artifacts with a cache entry.
    pub async fn len(&self) -> usize {
        self.loaders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.loaders.read().await.is_empty()
    }

    async fn slot(&self, artifact: &str) -> Slot {
        if let Some(slot) = self.loaders.read().await.get(artifact) {
            return Arc::clone(slot);
        }

        let mut loaders = self.loaders.write().await;
        Arc::clone(loaders.entry(artifact.to_string()).or_default())
    }

    async fn create_loader(&self, artifact: &str) -> Arc<Loader> {
        let loader = match self.resolver.resolve_version(artifact).await {
            Some(resolved) => Loader::found(
                format!("{} webjar", artifact),
                format!(
                    "{}/resources/webjars/{}/{}/",
                    self.resolver.meta_root(),
                    artifact,
                    resolved.version
                ),
            ),
            None => Loader::not_found(artifact),
        };
        tracing::debug!(artifact = %artifact, loader = ?loader, "Created webjar loader");
        Arc::new(loader)
    }
}

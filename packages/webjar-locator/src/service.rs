//! Request-level façade over the static loader and the webjar loader cache.

use std::sync::Arc;

use crate::access::ResourceAccess;
use crate::cache::LoaderCache;
use crate::error::AssetError;
use crate::loader::{Asset, Loader};
use crate::version::{ArtifactVersionResolver, DEFAULT_META_ROOT};

/// Serves static files and webjar files from one resource set.
pub struct StaticAssetService {
    access: Arc<dyn ResourceAccess>,
    static_files: Loader,
    webjars: LoaderCache,
}

impl StaticAssetService {
    /// Creates a service over `access`, using `meta_root` for both the
    /// static prefix and webjar metadata.
    pub fn new(access: Arc<dyn ResourceAccess>, meta_root: &str) -> Self {
        let resolver = ArtifactVersionResolver::new(Arc::clone(&access), meta_root);
        Self {
            static_files: Loader::found("static", format!("{}/static/", meta_root)),
            webjars: LoaderCache::new(resolver),
            access,
        }
    }

    /// Creates a service using the default `META-INF` root.
    pub fn with_default_root(access: Arc<dyn ResourceAccess>) -> Self {
        Self::new(access, DEFAULT_META_ROOT)
    }

    pub fn webjars(&self) -> &LoaderCache {
        &self.webjars
    }

    /// Serves `file_path` from the static prefix.
    pub async fn static_file(&self, file_path: &str) -> Result<Asset, AssetError> {
        self.static_files
            .resolve(self.access.as_ref(), file_path)
            .await
            .ok_or_else(|| AssetError::StaticFileNotFound {
                file_path: file_path.to_string(),
            })
    }

    /// Serves `file_path` from the webjar `artifact`.
    ///
    /// Distinguishes an unknown artifact from a missing file inside a known one.
    pub async fn webjar_file(&self, artifact: &str, file_path: &str) -> Result<Asset, AssetError> {
        let loader = self.webjars.get_loader(artifact).await;
        if !loader.is_found() {
            return Err(AssetError::UnknownArtifact {
                artifact: artifact.to_string(),
                file_path: file_path.to_string(),
            });
        }

        tracing::trace!(file_path = %file_path, loader = %loader.name(), "Serving webjar file");
        loader
            .resolve(self.access.as_ref(), file_path)
            .await
            .ok_or_else(|| AssetError::FileNotFound {
                artifact: artifact.to_string(),
                file_path: file_path.to_string(),
            })
    }
}

//! Embedded resources with rust-embed
//!
//! Bundles the `resources/` directory (static files, webjar metadata and webjar
//! contents under `META-INF/`) into the binary for single-file deployment.

use async_trait::async_trait;
use rust_embed::RustEmbed;
use std::io;
use std::sync::Arc;
use webjar_locator::access::contained;
use webjar_locator::{DirectoryResources, ResourceAccess, ResourceStream};

use crate::config::{AssetSource, AssetsConfig};

#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct EmbeddedAssets;

/// [`ResourceAccess`] over the resources compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

#[async_trait]
impl ResourceAccess for EmbeddedResources {
    async fn open(&self, path: &str) -> io::Result<Option<ResourceStream>> {
        // debug builds read from disk, so `..` must be refused here as well
        let Some(path) = contained(path) else {
            return Ok(None);
        };
        Ok(EmbeddedAssets::get(path)
            .map(|content| Box::pin(io::Cursor::new(content.data)) as ResourceStream))
    }
}

/// Builds the configured resource set.
pub fn resource_access(config: &AssetsConfig) -> Arc<dyn ResourceAccess> {
    match config.source {
        AssetSource::Embedded => {
            tracing::info!("Serving assets embedded in the binary");
            Arc::new(EmbeddedResources)
        }
        AssetSource::Directory => {
            tracing::info!("Serving assets from {:?}", config.root);
            Arc::new(DirectoryResources::new(config.root.clone()))
        }
    }
}

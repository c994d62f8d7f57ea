//! Path-prefixed resource loaders.

use crate::access::{ResourceAccess, ResourceStream};
use crate::media_type;

/// An opened asset, ready to be streamed to a client.
pub struct Asset {
    pub stream: ResourceStream,
    pub content_type: &'static str,
}

impl std::fmt::Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asset")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Cached lookup behavior for the static root or one webjar artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loader {
    /// Looks files up under `prefix`.
    Found { name: String, prefix: String },
    /// Sentinel for an artifact whose version could not be resolved.
    NotFound { name: String },
}

impl Loader {
    pub fn found(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Loader::Found {
            name: name.into(),
            prefix: prefix.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Loader::NotFound { name: name.into() }
    }

    /// Diagnostic label.
    pub fn name(&self) -> &str {
        match self {
            Loader::Found { name, .. } | Loader::NotFound { name } => name,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Loader::Found { .. })
    }

    /// Opens `prefix + file_path`.
    ///
    /// Returns `None` when the file does not exist, when the underlying
    /// lookup fails, and always for the [`Loader::NotFound`] sentinel.
    pub async fn resolve(&self, access: &dyn ResourceAccess, file_path: &str) -> Option<Asset> {
        let (name, prefix) = match self {
            Loader::Found { name, prefix } => (name, prefix),
            Loader::NotFound { .. } => return None,
        };

        let path = format!("{}{}", prefix, file_path);
        tracing::trace!(loader = %name, prefix = %prefix, file_path = %file_path, "Looking up file");

        let stream = match access.open(&path).await {
            Ok(Some(stream)) => stream,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(loader = %name, path = %path, "Failed to open resource: {}", e);
                return None;
            }
        };

        tracing::trace!(loader = %name, file_path = %file_path, "Found file");
        Some(Asset {
            stream,
            content_type: media_type::content_type_for(file_path),
        })
    }
}

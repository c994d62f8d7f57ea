//! Webjar version discovery from packaged Maven metadata.
//!
//! A webjar publishes `pom.properties` under one of three group namespaces,
//! depending on where it was repackaged from. The namespaces are probed in
//! [`MetadataNamespace::ALL`] order and the first existing descriptor wins.

use std::fmt;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

use crate::access::ResourceAccess;
use crate::error::MetadataError;
use crate::properties::Properties;

/// Default root directory for packaged metadata and resources.
pub const DEFAULT_META_ROOT: &str = "META-INF";

/// Group namespace a webjar descriptor may be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataNamespace {
    /// Classic webjars (`org.webjars`).
    Primary,
    /// Repackaged from npm (`org.webjars.npm`).
    Npm,
    /// Repackaged from bower (`org.webjars.bower`).
    Bower,
}

impl MetadataNamespace {
    /// All namespaces, in probe order.
    pub const ALL: [MetadataNamespace; 3] = [
        MetadataNamespace::Primary,
        MetadataNamespace::Npm,
        MetadataNamespace::Bower,
    ];

    pub fn group_id(self) -> &'static str {
        match self {
            MetadataNamespace::Primary => "org.webjars",
            MetadataNamespace::Npm => "org.webjars.npm",
            MetadataNamespace::Bower => "org.webjars.bower",
        }
    }

    /// Path of the `pom.properties` descriptor for `artifact`.
    pub fn descriptor_path(self, meta_root: &str, artifact: &str) -> String {
        format!(
            "{}/maven/{}/{}/pom.properties",
            meta_root,
            self.group_id(),
            artifact
        )
    }
}

impl fmt::Display for MetadataNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_id())
    }
}

/// A resolved webjar version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactVersion {
    pub artifact: String,
    pub version: String,
    pub namespace: MetadataNamespace,
}

/// Resolves webjar versions by probing metadata namespaces.
#[derive(Clone)]
pub struct ArtifactVersionResolver {
    access: Arc<dyn ResourceAccess>,
    meta_root: String,
}

impl ArtifactVersionResolver {
    pub fn new(access: Arc<dyn ResourceAccess>, meta_root: impl Into<String>) -> Self {
        Self {
            access,
            meta_root: meta_root.into(),
        }
    }

    pub fn meta_root(&self) -> &str {
        &self.meta_root
    }

    /// Resolves the packaged version of `artifact`.
    ///
    /// Returns `None` when no namespace holds a descriptor or the descriptor
    /// cannot be read or trusted; the reason is logged, not returned.
    pub async fn resolve_version(&self, artifact: &str) -> Option<ArtifactVersion> {
        match self.try_resolve(artifact).await {
            Ok(Some(resolved)) => {
                tracing::debug!(
                    artifact = %artifact,
                    version = %resolved.version,
                    namespace = %resolved.namespace,
                    "Found webjar version"
                );
                Some(resolved)
            }
            Ok(None) => {
                tracing::warn!(artifact = %artifact, "No pom.properties found");
                None
            }
            Err(e) => {
                tracing::warn!(artifact = %artifact, "Failed to resolve webjar version: {}", e);
                None
            }
        }
    }

    async fn try_resolve(&self, artifact: &str) -> Result<Option<ArtifactVersion>, MetadataError> {
        for namespace in MetadataNamespace::ALL {
            let path = namespace.descriptor_path(&self.meta_root, artifact);
            let stream = self
                .access
                .open(&path)
                .await
                .map_err(|source| MetadataError::Io {
                    path: path.clone(),
                    source,
                })?;

            let Some(mut stream) = stream else {
                continue;
            };

            let mut raw = Vec::new();
            stream
                .read_to_end(&mut raw)
                .await
                .map_err(|source| MetadataError::Io {
                    path: path.clone(),
                    source,
                })?;

            // property documents are ISO-8859-1
            let content: String = raw.iter().map(|&b| b as char).collect();
            let properties = Properties::parse(&content);
            let version = check_descriptor(&properties, &path, artifact)?;
            return Ok(Some(ArtifactVersion {
                artifact: artifact.to_string(),
                version,
                namespace,
            }));
        }
        Ok(None)
    }
}

/// Checks that the descriptor names `artifact` and returns its version.
fn check_descriptor(
    properties: &Properties,
    path: &str,
    artifact: &str,
) -> Result<String, MetadataError> {
    let found = properties.get("artifactId").unwrap_or_default();
    if found != artifact {
        return Err(MetadataError::IdentityMismatch {
            path: path.to_string(),
            expected: artifact.to_string(),
            found: found.to_string(),
        });
    }

    match properties.get("version").map(str::trim) {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(MetadataError::MissingProperty {
            path: path.to_string(),
            key: "version",
        }),
    }
}

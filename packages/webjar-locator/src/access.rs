//! Read-only access to packaged resources.
//!
//! The host runtime hands a [`ResourceAccess`] to the core at construction.
//! Paths are logical and `/`-separated; a leading `/` is ignored.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;
use tokio::io::AsyncRead;

/// An open, lazily consumed resource body.
///
/// Dropping the stream releases the underlying resource.
pub type ResourceStream = Pin<Box<dyn AsyncRead + Send>>;

/// Lookup of packaged resources by logical path.
#[async_trait]
pub trait ResourceAccess: Send + Sync {
    /// Opens the resource at `path`.
    ///
    /// Returns `Ok(None)` when no such resource exists.
    async fn open(&self, path: &str) -> io::Result<Option<ResourceStream>>;
}

/// Strips the leading `/` from a logical resource path.
pub fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Normalizes `path` and rejects it if any component could leave the root
/// (`..`, absolute or prefix components).
pub fn contained(path: &str) -> Option<&str> {
    let path = normalize(path);
    Path::new(path)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        .then_some(path)
}

/// Resources held in memory, keyed by logical path.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Bytes>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the resource at `path`.
    pub fn insert(&mut self, path: impl AsRef<str>, content: impl Into<Bytes>) {
        self.entries
            .insert(normalize(path.as_ref()).to_string(), content.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, path: impl AsRef<str>, content: impl Into<Bytes>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ResourceAccess for MemoryResources {
    async fn open(&self, path: &str) -> io::Result<Option<ResourceStream>> {
        Ok(self
            .entries
            .get(normalize(path))
            .cloned()
            .map(|content| Box::pin(io::Cursor::new(content)) as ResourceStream))
    }
}

/// Resources laid out under a directory, such as an unpacked application bundle.
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Creates a resource set rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a logical path onto the filesystem, refusing anything that
    /// could leave the root.
    fn resolve_path(&self, path: &str) -> Option<PathBuf> {
        contained(path).map(|relative| self.root.join(relative))
    }
}

#[async_trait]
impl ResourceAccess for DirectoryResources {
    async fn open(&self, path: &str) -> io::Result<Option<ResourceStream>> {
        let Some(full_path) = self.resolve_path(path) else {
            tracing::debug!(path = %path, "Rejected resource path outside root");
            return Ok(None);
        };

        match tokio::fs::metadata(&full_path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        }

        match tokio::fs::File::open(&full_path).await {
            Ok(file) => Ok(Some(Box::pin(file) as ResourceStream)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

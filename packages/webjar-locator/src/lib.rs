//! Static asset and webjar lookup over packaged application resources.
//!
//! Files under `META-INF/static/` are served as-is. Webjar files are served
//! from `META-INF/resources/webjars/<artifact>/<version>/`, where the version
//! is discovered once from the webjar's packaged `pom.properties` and cached
//! for the lifetime of the process.
//!
//! The host supplies a [`ResourceAccess`] implementation; everything else is
//! driven through [`StaticAssetService`].

pub mod access;
pub mod cache;
pub mod error;
pub mod loader;
pub mod media_type;
pub mod properties;
pub mod service;
pub mod version;

pub use access::{DirectoryResources, MemoryResources, ResourceAccess, ResourceStream};
pub use cache::LoaderCache;
pub use error::{AssetError, MetadataError};
pub use loader::{Asset, Loader};
pub use service::StaticAssetService;
pub use version::{ArtifactVersion, ArtifactVersionResolver, MetadataNamespace, DEFAULT_META_ROOT};

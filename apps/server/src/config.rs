//! Configuration module for the webjars server.
//!
//! Loads configuration from `config.toml` with environment variable overrides.

use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Where packaged resources are read from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetSource {
    /// Resources compiled into the binary.
    #[default]
    Embedded,
    /// Resources unpacked under `assets.root`.
    Directory,
}

/// Asset lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default)]
    pub source: AssetSource,
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,
    #[serde(default = "default_meta_root")]
    pub meta_root: String,
    /// Artifacts whose versions are resolved at startup.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            source: AssetSource::default(),
            root: default_assets_root(),
            meta_root: default_meta_root(),
            preload: Vec::new(),
        }
    }
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("./resources")
}

fn default_meta_root() -> String {
    webjar_locator::DEFAULT_META_ROOT.to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. `config.toml` in current directory (optional)
    /// 3. Environment variables with `WEBJARS_` prefix
    ///
    /// Environment variables use double underscore for nesting:
    /// - `WEBJARS_SERVER__PORT=9000` sets `server.port`
    /// - `WEBJARS_ASSETS__SOURCE=directory` sets `assets.source`
    pub fn load() -> Result<Self, AppError> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file path.
    pub fn load_from(config_path: &str) -> Result<Self, AppError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("assets.source", "embedded")?
            .set_default("assets.root", "./resources")?
            .set_default("assets.meta_root", webjar_locator::DEFAULT_META_ROOT)?
            .add_source(File::with_name(config_path).required(false))
            // WEBJARS_ASSETS__PRELOAD="jquery bootstrap" -> assets.preload
            .add_source(
                Environment::with_prefix("WEBJARS")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("assets.preload")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.assets.meta_root.trim_matches('/').is_empty() {
            return Err(AppError::Internal(
                "assets.meta_root must not be empty".to_string(),
            ));
        }

        if self.assets.source == AssetSource::Directory && !self.assets.root.is_dir() {
            tracing::warn!(
                "Asset root {:?} does not exist - every lookup will be a 404",
                self.assets.root
            );
        }

        Ok(())
    }

    /// Meta-root without surrounding slashes.
    pub fn meta_root(&self) -> &str {
        self.assets.meta_root.trim_matches('/')
    }

    /// Get the server socket address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::{IpAddr, Ipv4Addr, SocketAddr};
        let ip: IpAddr = self.server.host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid host '{}', using 0.0.0.0", self.server.host);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::load_from("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.source, AssetSource::Embedded);
        assert_eq!(config.assets.root, PathBuf::from("./resources"));
        assert_eq!(config.meta_root(), "META-INF");
        assert!(config.assets.preload.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let config = Config::load_from("nonexistent.toml").unwrap();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_host_falls_back() {
        let mut config = Config::load_from("nonexistent.toml").unwrap();
        config.server.host = "not-an-ip".to_string();
        assert!(config.server_addr().ip().is_unspecified());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[assets]\nsource = \"directory\"\nroot = \"/srv/bundle\"\nmeta_root = \"/BUNDLE/\"\npreload = [\"jquery\", \"bootstrap\"]"
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.assets.source, AssetSource::Directory);
        assert_eq!(config.assets.root, PathBuf::from("/srv/bundle"));
        assert_eq!(config.meta_root(), "BUNDLE");
        assert_eq!(config.assets.preload, vec!["jquery", "bootstrap"]);
    }

    #[test]
    fn test_empty_meta_root_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[assets]\nmeta_root = \"/\"").unwrap();

        assert!(Config::load_from(file.path().to_str().unwrap()).is_err());
    }
}

//! Webjars Server Library
//!
//! Serves static files and webjar contents packaged as application resources.
//! This library exposes modules for use in integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use webjar_locator::StaticAssetService;

pub mod api;
pub mod config;
pub mod error;
pub mod static_files;

use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assets: Arc<StaticAssetService>,
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build state from configuration, wiring the configured resource source.
    pub fn from_config(config: Config) -> Self {
        let access = static_files::resource_access(&config.assets);
        let assets = StaticAssetService::new(access, config.meta_root());
        Self {
            config: Arc::new(config),
            assets: Arc::new(assets),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get a reference to the asset service.
    pub fn assets(&self) -> &StaticAssetService {
        &self.assets
    }

    /// Resolve the configured preload artifacts.
    pub async fn preload_webjars(&self) {
        let preload = &self.config.assets.preload;
        if preload.is_empty() {
            return;
        }

        let found = self.assets.webjars().preload(preload).await;
        tracing::info!("Preloaded {} of {} webjars", found, preload.len());
        if found < preload.len() {
            tracing::warn!("Some configured webjars could not be resolved, see warnings above");
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::system::health_check))
        // wildcards never match an empty tail
        .route("/static/", get(api::assets::get_static_root))
        .route("/static/*file_path", get(api::assets::get_static))
        .route("/webjars/:artifact/", get(api::assets::get_webjar_root))
        .route("/webjars/:artifact/*file_path", get(api::assets::get_webjar))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

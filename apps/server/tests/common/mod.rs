//! Test infrastructure for webjars server integration tests.
//!
//! Provides a `TestApp` wrapper around `axum_test::TestServer` backed by an
//! in-memory resource set.

#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;

use webjar_locator::{MemoryResources, StaticAssetService};
use webjars_server::{config::Config, router, AppState};

/// Test application wrapper around axum_test::TestServer.
pub struct TestApp {
    server: TestServer,
    state: AppState,
}

impl TestApp {
    /// Create a test application over the default fixture resources.
    pub fn new() -> Self {
        Self::with_resources(fixture_resources())
    }

    /// Create a test application over the given resources.
    ///
    /// Uses the production router so tests run against the real routes.
    pub fn with_resources(resources: MemoryResources) -> Self {
        let config = Config {
            server: webjars_server::config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            assets: Default::default(),
        };

        let assets = StaticAssetService::new(Arc::new(resources), config.meta_root());
        let state = AppState {
            config: Arc::new(config),
            assets: Arc::new(assets),
            start_time: std::time::Instant::now(),
        };

        let server =
            TestServer::new(router(state.clone())).expect("Failed to create test server");

        Self { server, state }
    }

    /// Get a reference to the test server.
    pub fn server(&self) -> &TestServer {
        &self.server
    }

    /// Get the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Static files, an npm webjar and a bower-only webjar.
pub fn fixture_resources() -> MemoryResources {
    MemoryResources::new()
        .with("META-INF/static/index.html", "<html><body>home</body></html>")
        .with("META-INF/static/css/site.css", "body { color: black; }")
        .with("META-INF/static/favicon.ico", vec![0u8, 0, 1, 0])
        .with("META-INF/static/LICENSE", "MIT")
        .with(
            "META-INF/maven/org.webjars/known-artifact/pom.properties",
            pom("org.webjars", "known-artifact", "1.2.3"),
        )
        .with(
            "META-INF/resources/webjars/known-artifact/1.2.3/known.css",
            ".known { display: block; }",
        )
        .with(
            "META-INF/resources/webjars/known-artifact/1.2.3/fonts/icons.woff2",
            vec![b'w', b'O', b'F', b'2'],
        )
        .with(
            "META-INF/maven/org.webjars.bower/legacy-lib/pom.properties",
            pom("org.webjars.bower", "legacy-lib", "0.9.0"),
        )
        .with(
            "META-INF/resources/webjars/legacy-lib/0.9.0/legacy.png",
            vec![0x89, b'P', b'N', b'G'],
        )
}

pub fn pom(group_id: &str, artifact: &str, version: &str) -> String {
    format!(
        "#Generated by Maven\nversion={}\ngroupId={}\nartifactId={}\n",
        version, group_id, artifact
    )
}

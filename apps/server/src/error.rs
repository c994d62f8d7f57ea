//! Application error types for the webjars server.
//!
//! Provides a unified error type that implements `IntoResponse` for Axum.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use webjar_locator::AssetError;

/// Content type of every diagnostic body.
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Static file, webjar or webjar file not found
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Configuration loading/parsing errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Asset(e) => {
                tracing::debug!("Not found: {}", e);
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Config(e) => {
                // Log full error details but don't expose to client
                tracing::error!("Config error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "configuration error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, [(header::CONTENT_TYPE, PLAIN_TEXT)], format!("{}\n", message)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

//! Static file and webjar endpoints.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use webjar_locator::Asset;

use crate::error::Result;
use crate::AppState;

/// Serve `GET /static/*file_path`
pub async fn get_static(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Result<Response> {
    let asset = state.assets.static_file(&file_path).await?;
    Ok(stream_asset(asset))
}

/// Serve `GET /static/` (empty file path)
pub async fn get_static_root(State(state): State<AppState>) -> Result<Response> {
    let asset = state.assets.static_file("").await?;
    Ok(stream_asset(asset))
}

/// Serve `GET /webjars/:artifact/*file_path`
pub async fn get_webjar(
    State(state): State<AppState>,
    Path((artifact, file_path)): Path<(String, String)>,
) -> Result<Response> {
    let asset = state.assets.webjar_file(&artifact, &file_path).await?;
    Ok(stream_asset(asset))
}

/// Serve `GET /webjars/:artifact/` (empty file path)
pub async fn get_webjar_root(
    State(state): State<AppState>,
    Path(artifact): Path<String>,
) -> Result<Response> {
    let asset = state.assets.webjar_file(&artifact, "").await?;
    Ok(stream_asset(asset))
}

/// Streams the asset body; the underlying resource is released when the body
/// is dropped, whether fully sent or aborted.
fn stream_asset(asset: Asset) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, asset.content_type)],
        Body::from_stream(ReaderStream::new(asset.stream)),
    )
        .into_response()
}

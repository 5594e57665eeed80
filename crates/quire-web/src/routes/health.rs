//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::WebError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    posts: u64,
}

/// Public health check endpoint.
///
/// Touches the store so a broken database shows up as a 503 rather than a
/// healthy probe.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, WebError> {
    let posts = state.store.count()?;
    Ok(Json(HealthResponse {
        status: "ok",
        service: "quire",
        version: env!("CARGO_PKG_VERSION"),
        posts,
    }))
}

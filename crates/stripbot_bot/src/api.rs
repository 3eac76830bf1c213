//! HTTP API for exposing bot metrics.
//!
//! Runs as an independent read-only task next to the consumer loop; it
//! only ever reads counter snapshots and never blocks the stream.

use crate::BotMetrics;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use std::net::SocketAddr;
use stripbot_error::{HttpError, StripbotResult};
use tracing::{info, instrument};

/// API state containing the shared metrics collector.
#[derive(Clone)]
pub struct ApiState {
    metrics: BotMetrics,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(metrics: BotMetrics) -> Self {
        Self { metrics }
    }
}

/// Creates the stats API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Get current metrics snapshot.
async fn get_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let snapshot = state.metrics.snapshot();
    (StatusCode::OK, Json(snapshot))
}

/// Serve the stats API on `addr` until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[instrument(skip(metrics))]
pub async fn serve_stats(addr: SocketAddr, metrics: BotMetrics) -> StripbotResult<()> {
    let router = create_router(ApiState::new(metrics));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind stats API to {}: {}", addr, e)))?;

    info!(%addr, "Stats API listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| HttpError::new(format!("Stats API server failed: {}", e)))?;

    Ok(())
}

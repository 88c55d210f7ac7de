//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::{get, post},
    Router,
};
use skin_tone::Analyzer;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<Analyzer>,
}

/// Create application state from a loaded configuration.
///
/// Fails if the configured thresholds or margin are invalid.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let analyzer = config
        .analyzer()
        .map_err(|e| anyhow::anyhow!("Invalid analysis configuration: {e}"))?;

    let thresholds = analyzer.extractor().thresholds();
    tracing::info!(
        hue = ?(thresholds.hue.min, thresholds.hue.max),
        saturation = ?(thresholds.saturation.min, thresholds.saturation.max),
        value = ?(thresholds.value.min, thresholds.value.max),
        min_skin_pixels = analyzer.extractor().min_skin_pixels(),
        undertone_margin = analyzer.classifier().margin(),
        "Analyzer ready"
    );

    Ok(AppState {
        config: Arc::new(config),
        analyzer: Arc::new(analyzer),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(api::handle_index))
        .route("/analyze", post(handle_analyze))
        .route("/health", get(api::handle_health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(TraceLayer::new_for_http())
        // The page may be hosted elsewhere during development
        .layer(CorsLayer::permissive())
}

// Wrapper handler to extract the analyzer for the underlying API handler

async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<api::AnalyzeResponse>, ApiError> {
    api::handle_analyze(State(state.analyzer), multipart).await
}

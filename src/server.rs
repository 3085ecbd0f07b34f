//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use brick_mosaic::Palette;

use crate::api;

/// Maximum accepted upload size in bytes.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub palette: Arc<Palette>,
}

/// Create application state with the built-in brick palette.
pub fn create_app_state() -> AppState {
    AppState {
        palette: Arc::new(Palette::lego()),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/mosaic", post(api::handle_mosaic))
        .route("/api/palette", get(api::handle_palette))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state, upload cap and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}

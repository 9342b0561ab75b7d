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

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::TemplateService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub templates: Arc<TemplateService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> AppState {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let templates = Arc::new(TemplateService::new(asset_loader));

    AppState { config, templates }
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.upload.max_bytes;

    Router::new()
        .route("/", get(api::handle_index))
        .route("/upload", post(api::handle_upload))
        .route("/api/colors", post(api::handle_colors))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
}

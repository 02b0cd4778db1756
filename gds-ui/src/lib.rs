//! gds-ui library - Green Datacenter Selector web module
//!
//! Serves the workload form + regional heatmap UI and the JSON API backing
//! it. All state is per-request; the only thing shared across handlers is
//! the upstream HTTP client.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::CarbonIntensityClient;

pub mod api;
pub mod error;
pub mod services;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Carbon Intensity API client
    pub carbon_client: Arc<CarbonIntensityClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(carbon_client: CarbonIntensityClient) -> Self {
        Self {
            carbon_client: Arc::new(carbon_client),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/regions", get(api::list_regions))
        .route("/api/estimate", post(api::estimate))
        .route("/api/mix/:region", get(api::generation_mix))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

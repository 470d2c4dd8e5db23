//! baseline-ui library interface
//!
//! Exposes the router, state, renderer and WebStatus client for integration
//! testing.

pub mod api;
pub mod render;
pub mod services;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

use baseline_common::config::ServiceConfig;
use baseline_common::feature_ids;
use baseline_common::models::FeatureRecord;

use crate::services::WebStatusClient;

/// Application state shared across handlers
///
/// Holds no shared mutable state: every request performs an independent
/// fetch, and results are never cached across requests.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: ServiceConfig,
    /// WebStatus API client (internally reference-counted)
    pub client: WebStatusClient,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServiceConfig, client: WebStatusClient) -> Self {
        Self {
            config,
            client,
            startup_time: Utc::now(),
        }
    }

    /// Fetch a feature record, logging a hint for ids outside the known
    /// registry (the API stays authoritative either way).
    pub async fn fetch_feature(&self, feature_id: &str) -> Option<FeatureRecord> {
        if !feature_ids::is_known(feature_id) {
            tracing::debug!(
                feature_id = %feature_id,
                "Feature id not in the generated registry, querying API anyway"
            );
        }
        self.client.fetch_feature(feature_id).await
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages + stylesheet)
        .merge(api::ui_routes())
        // API routes
        .merge(api::badge_routes())
        .merge(api::status_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

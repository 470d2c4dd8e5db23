//! JSON status endpoint

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use baseline_common::models::FeatureRecord;
use baseline_common::status::{resolve_status, BaselineStatus};

use crate::AppState;

/// Response for the status endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// The fetched record; null when the lookup found nothing
    pub feature: Option<FeatureRecord>,
    /// Derived presentation status
    pub status: BaselineStatus,
}

/// GET /api/status/:feature_id
///
/// Fetches the record fresh and returns it with its derived status. Fetch
/// failure is not an HTTP error: it surfaces as a null feature with the
/// unknown status.
pub async fn feature_status(
    State(state): State<AppState>,
    Path(feature_id): Path<String>,
) -> Json<StatusResponse> {
    let feature = state.fetch_feature(&feature_id).await;
    let status = resolve_status(feature.as_ref());

    Json(StatusResponse { feature, status })
}

/// Build status routes
pub fn status_routes() -> Router<AppState> {
    Router::new().route("/api/status/:feature_id", get(feature_status))
}

//! Embeddable badge endpoint

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use crate::render::render_badge;
use crate::AppState;

/// GET /badge/:feature_id
///
/// Fetches the record fresh and returns the rendered badge fragment. When the
/// lookup comes back empty the fragment shows the unknown availability state,
/// still with a 200.
pub async fn badge_fragment(
    State(state): State<AppState>,
    Path(feature_id): Path<String>,
) -> Html<String> {
    let feature = state.fetch_feature(&feature_id).await;
    Html(render_badge(&feature_id, feature.as_ref()))
}

/// Build badge routes
pub fn badge_routes() -> Router<AppState> {
    Router::new().route("/badge/:feature_id", get(badge_fragment))
}

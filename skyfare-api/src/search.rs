use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;
use uuid::Uuid;

use skyfare_core::{RawSearchQuery, SearchRequest};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search))
}

async fn search(
    State(state): State<AppState>,
    Query(raw): Query<RawSearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let request = SearchRequest::from_raw(&raw)?;

    let search_id = Uuid::new_v4();
    info!(
        %search_id,
        origin = %request.origin,
        destination = %request.destination,
        trip = ?request.trip,
        "search accepted"
    );

    let response = state.engine.search(request).await?;

    // Fares are time-sensitive; intermediaries must not cache them
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(response)))
}

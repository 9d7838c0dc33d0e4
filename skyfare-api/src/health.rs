use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use futures_util::future::join_all;
use serde_json::json;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/health/providers", get(providers_health))
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "ts": Utc::now().to_rfc3339() }))
}

/// Drives every registered provider's availability probe. Diagnostics
/// only; the search path never calls this.
async fn providers_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let probes = state.engine.providers().iter().map(|provider| {
        let provider = Arc::clone(provider);
        async move {
            let status = provider.health().await;
            json!({
                "id": provider.id(),
                "ok": status.ok,
                "details": status.details,
            })
        }
    });

    let providers = join_all(probes).await;
    let all_ok = providers
        .iter()
        .all(|p| p["ok"].as_bool().unwrap_or(false));

    Json(json!({ "ok": all_ok, "providers": providers }))
}

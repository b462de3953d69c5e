//! Status endpoints.

use axum::Json;
use axum::extract::State;

use chatrelay_types::chat::StatusBanner;

use crate::state::AppState;

/// GET / - Status banner.
pub async fn banner(State(state): State<AppState>) -> Json<StatusBanner> {
    Json(StatusBanner::running(state.chat_service.model()))
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

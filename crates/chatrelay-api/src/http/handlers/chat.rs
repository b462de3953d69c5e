//! Chat relay HTTP handlers.
//!
//! Endpoints:
//! - POST /chat          - Relay a message and return the stored exchange
//! - GET  /chat/history  - All stored exchanges, most recent first
//!
//! Request bodies are validated by the `Json` extractor: a missing or
//! non-string `message` is rejected with 422 before the handler runs.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use chatrelay_types::chat::{ChatRecord, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat - Generate a reply and persist the exchange.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatRecord>, AppError> {
    let start = Instant::now();

    let record = state.chat_service.send(&body).await?;

    tracing::debug!(
        id = record.id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "POST /chat completed"
    );

    Ok(Json(record))
}

/// GET /chat/history - List every stored exchange.
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<ChatRecord>>, AppError> {
    let records = state.chat_service.history().await?;
    Ok(Json(records))
}

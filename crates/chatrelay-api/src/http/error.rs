//! Application error type mapping to HTTP status codes.
//!
//! Upstream and storage failures are not part of the client contract: they
//! become a bare 500 with a fixed body, and the cause goes to the log only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatrelay_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Generation or storage failure from the chat service.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Chat(ChatError::Llm(e)) => {
                tracing::error!(error = %e, "Generation request failed");
            }
            AppError::Chat(ChatError::Repository(e)) => {
                tracing::error!(error = %e, "Chat store failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal Server Error" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_types::error::RepositoryError;
    use chatrelay_types::llm::LlmError;

    #[test]
    fn test_llm_error_maps_to_500() {
        let resp = AppError::from(ChatError::Llm(LlmError::AuthenticationFailed)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_repository_error_maps_to_500() {
        let resp = AppError::from(ChatError::Repository(RepositoryError::Query(
            "database is locked".to_string(),
        )))
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

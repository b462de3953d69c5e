use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in chatrelay-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

/// Errors related to secret resolution.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret '{0}' is not set")]
    NotFound(String),

    #[error("secret '{0}' is empty")]
    Empty(String),
}

/// Errors surfaced by the chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

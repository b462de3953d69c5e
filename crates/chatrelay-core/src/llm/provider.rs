//! LlmProvider trait definition.
//!
//! This is the core abstraction that all generation providers implement.

use chatrelay_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generation backends (Gemini, test doubles, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap in
/// [`BoxLlmProvider`](super::box_provider::BoxLlmProvider) when the concrete
/// type must be chosen at runtime.
///
/// Implementations live in chatrelay-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

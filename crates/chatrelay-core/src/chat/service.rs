//! Chat service: relay a message to the provider and record the exchange.
//!
//! ChatService coordinates between the `ChatRepository` and a
//! `BoxLlmProvider`. A record is appended only after the provider returns;
//! a failed generation leaves the store untouched.

use tracing::field::Empty;
use tracing::{Instrument, debug, info, info_span};

use chatrelay_types::chat::{ChatRecord, ChatRequest};
use chatrelay_types::error::ChatError;
use chatrelay_types::llm::CompletionRequest;

use crate::chat::repository::ChatRepository;
use crate::llm::box_provider::BoxLlmProvider;

/// Relays chat messages to the generation provider and persists each exchange.
///
/// Generic over `ChatRepository` to maintain clean architecture
/// (chatrelay-core never depends on chatrelay-infra).
pub struct ChatService<R: ChatRepository> {
    repo: R,
    provider: BoxLlmProvider,
    model: String,
}

impl<R: ChatRepository> ChatService<R> {
    /// Create a new chat service using `model` for every generation call.
    pub fn new(repo: R, provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            repo,
            provider,
            model: model.into(),
        }
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate a reply for `request.message` and append the exchange.
    ///
    /// Provider and storage errors propagate unchanged; there are no retries.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatRecord, ChatError> {
        let completion = CompletionRequest::prompt(&self.model, &request.message);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %self.model,
            gen_ai.usage.input_tokens = Empty,
            gen_ai.usage.output_tokens = Empty,
            gen_ai.response.finish_reason = Empty,
        );

        let response = self
            .provider
            .complete(&completion)
            .instrument(span.clone())
            .await?;

        span.record("gen_ai.usage.input_tokens", response.usage.input_tokens);
        span.record("gen_ai.usage.output_tokens", response.usage.output_tokens);
        span.record(
            "gen_ai.response.finish_reason",
            tracing::field::display(&response.stop_reason),
        );

        let record = self.repo.append(&request.message, &response.content).await?;

        info!(
            id = record.id,
            model = %response.model,
            reply_chars = record.bot_reply.len(),
            "Chat exchange recorded"
        );

        Ok(record)
    }

    /// Every stored exchange, most recent first.
    pub async fn history(&self) -> Result<Vec<ChatRecord>, ChatError> {
        let records = self.repo.list_all().await?;
        debug!(count = records.len(), "Loaded chat history");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chatrelay_types::error::RepositoryError;
    use chatrelay_types::llm::{CompletionResponse, LlmError, StopReason, Usage};
    use chrono::Utc;

    use super::*;
    use crate::llm::provider::LlmProvider;

    /// In-memory append-only store.
    #[derive(Default)]
    struct MemoryChatRepository {
        rows: Mutex<Vec<ChatRecord>>,
    }

    impl ChatRepository for MemoryChatRepository {
        async fn append(
            &self,
            user_message: &str,
            bot_reply: &str,
        ) -> Result<ChatRecord, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let record = ChatRecord {
                id: rows.len() as i64 + 1,
                user_message: user_message.to_string(),
                bot_reply: bot_reply.to_string(),
                timestamp: Utc::now(),
            };
            rows.push(record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<ChatRecord>, RepositoryError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.reverse();
            Ok(rows)
        }
    }

    /// Replies with "echo: {prompt}" and counts calls.
    struct EchoProvider {
        calls: Arc<AtomicUsize>,
    }

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CompletionResponse {
                id: None,
                content: format!("echo: {}", request.messages[0].content),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage {
                    input_tokens: 3,
                    output_tokens: 5,
                },
            })
        }
    }

    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::AuthenticationFailed)
        }
    }

    fn echo_service() -> (ChatService<MemoryChatRepository>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = BoxLlmProvider::new(EchoProvider {
            calls: calls.clone(),
        });
        let service = ChatService::new(
            MemoryChatRepository::default(),
            provider,
            "gemini-1.5-flash",
        );
        (service, calls)
    }

    #[tokio::test]
    async fn test_send_returns_persisted_record() {
        let (service, calls) = echo_service();

        let record = service.send(&ChatRequest::new("hello")).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.user_message, "hello");
        assert_eq!(record.bot_reply, "echo: hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_send_accepts_empty_message() {
        let (service, _) = echo_service();
        let record = service.send(&ChatRequest::new("")).await.unwrap();
        assert_eq!(record.user_message, "");
        assert_eq!(record.bot_reply, "echo: ");
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first() {
        let (service, _) = echo_service();
        service.send(&ChatRequest::new("a")).await.unwrap();
        service.send(&ChatRequest::new("b")).await.unwrap();

        let history = service.history().await.unwrap();
        let messages: Vec<&str> = history.iter().map(|r| r.user_message.as_str()).collect();
        assert_eq!(messages, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_and_stores_nothing() {
        let service = ChatService::new(
            MemoryChatRepository::default(),
            BoxLlmProvider::new(FailingProvider),
            "gemini-1.5-flash",
        );

        let err = service.send(&ChatRequest::new("hello")).await.unwrap_err();
        assert!(matches!(err, ChatError::Llm(LlmError::AuthenticationFailed)));
        assert!(service.history().await.unwrap().is_empty());
    }

    #[test]
    fn test_service_exposes_model_and_provider() {
        let (service, _) = echo_service();
        assert_eq!(service.model(), "gemini-1.5-flash");
        assert_eq!(service.provider_name(), "echo");
    }
}

//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and the
//! REST API. `ChatService` is generic over its repository, but AppState pins
//! it to the SQLite implementation.

use std::path::Path;
use std::sync::Arc;

use secrecy::SecretString;

use chatrelay_core::chat::service::ChatService;
use chatrelay_core::llm::box_provider::BoxLlmProvider;
use chatrelay_infra::llm::create_provider;
use chatrelay_infra::sqlite::chat::SqliteChatRepository;
use chatrelay_infra::sqlite::pool::{DatabasePool, database_url};
use chatrelay_types::config::RelayConfig;

/// Concrete chat service pinned to the SQLite repository.
pub type ConcreteChatService = ChatService<SqliteChatRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Initialize the application state: open the DB under `data_dir` and
    /// wire the Gemini provider with `api_key`.
    pub async fn init(
        config: RelayConfig,
        data_dir: &Path,
        api_key: SecretString,
    ) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let db_pool = DatabasePool::new(&database_url(data_dir)).await?;
        let provider = create_provider(&config, api_key);

        tracing::info!(
            data_dir = %data_dir.display(),
            model = %config.model,
            "Application state initialized"
        );

        Ok(Self::from_parts(config, db_pool, provider))
    }

    /// Wire state from already-built parts. Lets callers supply any provider.
    pub fn from_parts(config: RelayConfig, db_pool: DatabasePool, provider: BoxLlmProvider) -> Self {
        let chat_repo = SqliteChatRepository::new(db_pool);
        let chat_service = ChatService::new(chat_repo, provider, config.model.clone());

        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }
}

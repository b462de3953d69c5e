//! ChatRepository trait definition.
//!
//! Records are append-only: there is no update or delete operation.

use chatrelay_types::chat::ChatRecord;
use chatrelay_types::error::RepositoryError;

/// Repository trait for chat record persistence.
///
/// Implementations live in chatrelay-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Insert a new record. The store assigns `id` and `timestamp` and
    /// returns the persisted row.
    fn append(
        &self,
        user_message: &str,
        bot_reply: &str,
    ) -> impl std::future::Future<Output = Result<ChatRecord, RepositoryError>> + Send;

    /// Every record, most recent first (timestamp DESC, then id DESC).
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatRecord>, RepositoryError>> + Send;
}

//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `chatrelay-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, inserts on the writer,
//! lists on the reader.

use chatrelay_core::chat::repository::ChatRepository;
use chatrelay_types::chat::ChatRecord;
use chatrelay_types::error::RepositoryError;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatRecord.
struct ChatRow {
    id: i64,
    user_message: String,
    bot_reply: String,
    timestamp: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_message: row.try_get("user_message")?,
            bot_reply: row.try_get("bot_reply")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_record(self) -> Result<ChatRecord, RepositoryError> {
        Ok(ChatRecord {
            id: self.id,
            user_message: self.user_message,
            bot_reply: self.bot_reply,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Fixed-width UTC form so lexical order in SQLite equals chronological order.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl ChatRepository for SqliteChatRepository {
    async fn append(
        &self,
        user_message: &str,
        bot_reply: &str,
    ) -> Result<ChatRecord, RepositoryError> {
        // Stamp only once the single writer connection is held, so timestamp
        // order agrees with id order under concurrent appends.
        let mut conn = self
            .pool
            .writer
            .acquire()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        let stamp = format_datetime(&Utc::now());

        let result = sqlx::query(
            "INSERT INTO chats (user_message, bot_reply, timestamp) VALUES (?, ?, ?)",
        )
        .bind(user_message)
        .bind(bot_reply)
        .bind(&stamp)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        // Round-trip through the stored text so the returned record matches
        // what a later list_all yields.
        Ok(ChatRecord {
            id: result.last_insert_rowid(),
            user_message: user_message.to_string(),
            bot_reply: bot_reply.to_string(),
            timestamp: parse_datetime(&stamp)?,
        })
    }

    async fn list_all(&self) -> Result<Vec<ChatRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_message, bot_reply, timestamp FROM chats ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let chat_row =
                ChatRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            records.push(chat_row.into_record()?);
        }

        Ok(records)
    }
}

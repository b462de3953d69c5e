//! Chat domain types.
//!
//! A [`ChatRecord`] is one stored user-message/bot-reply exchange. Records are
//! immutable once written; the store only appends and lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted chat exchange.
///
/// Serialized with camelCase field names (`userMessage`, `botReply`) to match
/// the HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    /// Server-assigned, strictly increasing identifier.
    pub id: i64,
    pub user_message: String,
    pub bot_reply: String,
    /// Creation time (UTC), assigned by the store on insert.
    pub timestamp: DateTime<Utc>,
}

/// Inbound chat request body: `{"message": "..."}`.
///
/// `message` is required and must be a string. Empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Status banner returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBanner {
    pub message: String,
}

impl StatusBanner {
    /// Banner announcing that the backend is up and which model it relays to.
    pub fn running(model: &str) -> Self {
        Self {
            message: format!("chatrelay backend is running ({model})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_chat_record_serializes_camel_case() {
        let record = ChatRecord {
            id: 7,
            user_message: "hello".to_string(),
            bot_reply: "hi there".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["userMessage"], "hello");
        assert_eq!(json["botReply"], "hi there");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2025-03-01T12:00:00"));
        assert!(json.get("user_message").is_none());
    }

    #[test]
    fn test_chat_request_accepts_empty_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert_eq!(req, ChatRequest::new(""));
    }

    #[test]
    fn test_chat_request_rejects_missing_message() {
        let result = serde_json::from_str::<ChatRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_rejects_null_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"message": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_ignores_unknown_fields() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message": "hey", "session": 3}"#).unwrap();
        assert_eq!(req.message, "hey");
    }

    #[test]
    fn test_status_banner_mentions_model() {
        let banner = StatusBanner::running("gemini-1.5-flash");
        assert!(banner.message.contains("running"));
        assert!(banner.message.contains("gemini-1.5-flash"));
    }
}

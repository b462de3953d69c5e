//! Shared domain types for chatrelay.
//!
//! Chat records, request shapes, LLM request/response types, configuration,
//! and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;

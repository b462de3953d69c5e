//! HTTP/REST API layer for chatrelay.
//!
//! Axum-based API: status banner, chat relay, and chat history, behind CORS
//! and request tracing middleware.

pub mod error;
pub mod handlers;
pub mod router;

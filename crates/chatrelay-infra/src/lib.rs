//! Infrastructure layer for chatrelay.
//!
//! Contains implementations of the traits defined in `chatrelay-core`:
//! SQLite storage, the Gemini generation client, config file loading, and
//! environment secret lookup.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;

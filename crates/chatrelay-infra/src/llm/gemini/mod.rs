//! Google Gemini generation provider.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`LlmProvider`](chatrelay_core::llm::provider::LlmProvider) trait for the
//! Gemini `generateContent` REST endpoint.

pub mod client;
pub mod types;

pub use client::GeminiProvider;

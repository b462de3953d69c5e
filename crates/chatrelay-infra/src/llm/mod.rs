//! Generation provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `chatrelay-core`, and a factory ([`create_provider`]) that builds the
//! configured provider behind a [`BoxLlmProvider`].
//!
//! [`LlmProvider`]: chatrelay_core::llm::provider::LlmProvider

pub mod gemini;

use secrecy::SecretString;

use chatrelay_core::llm::box_provider::BoxLlmProvider;
use chatrelay_types::config::RelayConfig;

use self::gemini::GeminiProvider;

/// Create the generation provider described by `config`.
pub fn create_provider(config: &RelayConfig, api_key: SecretString) -> BoxLlmProvider {
    let provider = GeminiProvider::new(api_key, config.model.clone())
        .with_base_url(config.gemini_base_url.clone());
    BoxLlmProvider::new(provider)
}

//! Environment variable secret provider.
//!
//! Read-only lookup of credentials from the process environment. A `.env`
//! file, if present, is loaded into the environment by the binary before
//! this provider is consulted.

use secrecy::{ExposeSecret, SecretString};

use chatrelay_types::error::SecretError;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    /// Create a new environment variable secret provider.
    pub fn new() -> Self {
        Self
    }

    /// Look up `key`. Unset or non-Unicode values are treated as missing.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) => Some(SecretString::from(val)),
            Err(std::env::VarError::NotPresent) => None,
            // Secrets must be valid strings
            Err(std::env::VarError::NotUnicode(_)) => None,
        }
    }

    /// Look up `key`, failing if it is unset or blank.
    pub fn require(&self, key: &str) -> Result<SecretString, SecretError> {
        let value = self
            .get(key)
            .ok_or_else(|| SecretError::NotFound(key.to_string()))?;
        if value.expose_secret().trim().is_empty() {
            return Err(SecretError::Empty(key.to_string()));
        }
        Ok(value)
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

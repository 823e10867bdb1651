pub mod prompt;

use std::fmt;

use crate::config::GeminiConfig;

/// Environment variable name for providing the Gemini API key
pub const ENV_API_KEY_VAR: &str = "GEMINI_API_KEY";

pub use prompt::{prompt_for_api_key, resolve_api_key};

/// Which stored key wins: the environment value, then the config file
pub fn pick_api_key(env_value: Option<String>, config: &GeminiConfig) -> Option<String> {
    env_value
        .and_then(non_empty)
        .or_else(|| get_api_key_from_config(config))
}

/// API key stored in the config file, if any
pub fn get_api_key_from_config(config: &GeminiConfig) -> Option<String> {
    config.api_key.clone().and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug)]
pub enum CredentialError {
    /// No key configured and no terminal to ask on
    KeyNotFound,
    PromptFailed(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::KeyNotFound => write!(
                f,
                "Gemini API key not found. Set {} or add gemini.api_key to the config file",
                ENV_API_KEY_VAR
            ),
            CredentialError::PromptFailed(msg) => write!(f, "Failed to read API key: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}

use std::io::IsTerminal;

use super::{pick_api_key, CredentialError, ENV_API_KEY_VAR};
use crate::config::GeminiConfig;

/// Prompts the user to enter a Gemini API key without echoing it
pub fn prompt_for_api_key() -> Result<String, CredentialError> {
    println!("A Gemini API key is needed for personalized recommendations.");
    println!("Create one at: https://aistudio.google.com/app/apikey");
    println!();

    let key = rpassword::prompt_password("Enter API key: ")
        .map_err(|e| CredentialError::PromptFailed(e.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(CredentialError::PromptFailed("API key cannot be empty".to_string()));
    }

    Ok(key.to_string())
}

/// Find an API key: environment first, then config, then an interactive
/// prompt when stdin is a terminal. The prompted key is not stored.
pub fn resolve_api_key(config: &GeminiConfig) -> Result<String, CredentialError> {
    if let Some(key) = pick_api_key(std::env::var(ENV_API_KEY_VAR).ok(), config) {
        log::debug!("Using stored API key");
        return Ok(key);
    }
    if std::io::stdin().is_terminal() {
        return prompt_for_api_key();
    }
    Err(CredentialError::KeyNotFound)
}

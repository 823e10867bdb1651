use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::survey::{default_questionnaire, Questionnaire};

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration. Every section is optional.
///
/// Example YAML:
/// ```yaml
/// gemini:
///   model: gemini-2.5-flash
///   timeout_secs: 20
/// journal:
///   path: /home/me/notes/mindbloom.json
/// questions:
///   - key: q1
///     prompt: "How often do you feel Overwhelmed?"
///     options:
///       - { label: "Rarely", score: 4 }
///       - { label: "Always", score: 1 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Replaces the built-in questionnaire
    #[serde(default)]
    pub questions: Option<Questionnaire>,

    #[serde(default)]
    pub gemini: Option<GeminiConfig>,

    #[serde(default)]
    pub journal: Option<JournalConfig>,
}

impl Config {
    /// The configured questionnaire, or the built-in one
    pub fn questionnaire(&self) -> Questionnaire {
        self.questions.clone().unwrap_or_else(default_questionnaire)
    }

    pub fn gemini(&self) -> GeminiConfig {
        self.gemini.clone().unwrap_or_default()
    }

    /// Journal file location, defaulting to ~/.config/mindbloom/journal.json
    pub fn journal_path(&self) -> PathBuf {
        self.journal
            .as_ref()
            .and_then(|j| j.path.clone())
            .unwrap_or_else(crate::journal::get_journal_path)
    }
}

/// Text-generation service settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Prefer the GEMINI_API_KEY environment variable over storing this here
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_GEMINI_ENDPOINT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JournalConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.questionnaire(), default_questionnaire());
        assert_eq!(config.gemini().model(), DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini().endpoint(), DEFAULT_GEMINI_ENDPOINT);
        assert_eq!(config.gemini().timeout_secs(), 30);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
gemini:
  api_key: "abc123"
  model: "gemini-2.5-flash"
  endpoint: "http://localhost:8080/v1beta"
  timeout_secs: 5
journal:
  path: "/tmp/journal.json"
questions:
  - key: sleep
    prompt: "How well do you sleep?"
    options:
      - { label: "Well", score: 2 }
      - { label: "Badly", score: 1 }
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let gemini = config.gemini();
        assert_eq!(gemini.api_key.as_deref(), Some("abc123"));
        assert_eq!(gemini.model(), "gemini-2.5-flash");
        assert_eq!(gemini.endpoint(), "http://localhost:8080/v1beta");
        assert_eq!(gemini.timeout_secs(), 5);
        assert_eq!(config.journal_path(), PathBuf::from("/tmp/journal.json"));

        let questionnaire = config.questionnaire();
        assert_eq!(questionnaire.len(), 1);
        assert_eq!(questionnaire.max_option_score(), Some(2));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = r#"
forum:
  enabled: true
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_journal_path_defaults_under_config_dir() {
        let config = Config::default();
        assert!(config.journal_path().ends_with("mindbloom/journal.json"));
    }
}

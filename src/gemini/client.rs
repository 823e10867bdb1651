use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};

use super::types::{GenerateRequest, GenerateResponse};
use crate::config::GeminiConfig;

/// Retries after the first failed attempt
const MAX_RETRIES: usize = 3;

/// Anything that can turn a system instruction plus a user prompt into text.
///
/// `Ok(None)` means the service answered but produced no text.
pub trait TextGenerator {
    fn generate(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<Option<String>, GeminiError>> + Send;
}

#[derive(Debug)]
pub enum GeminiError {
    Request(String),
    Status { status: u16, body: String },
    Decode(String),
}

impl GeminiError {
    /// Transport failures, throttling and server errors are worth another try
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiError::Request(_) => true,
            GeminiError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            GeminiError::Decode(_) => false,
        }
    }
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::Request(msg) => write!(f, "Request to the AI model failed: {}", msg),
            GeminiError::Status { status, body } => {
                write!(f, "AI model returned HTTP {}: {}", status, body)
            }
            GeminiError::Decode(msg) => write!(f, "Unreadable response from the AI model: {}", msg),
        }
    }
}

impl std::error::Error for GeminiError {}

/// Client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    url: Url,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, api_key: &str) -> Result<Self> {
        let url = generate_url(config.endpoint(), config.model(), api_key)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("mindbloom/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        log::debug!("Using model {} at {}", config.model(), config.endpoint());
        Ok(Self { http, url })
    }

    async fn generate_once(&self, request: &GenerateRequest) -> Result<Option<String>, GeminiError> {
        let response = self
            .http
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.without_url().to_string()))?;

        Ok(parsed.first_text().map(str::to_string))
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, system: &str, user: &str) -> Result<Option<String>, GeminiError> {
        let request = GenerateRequest::new(system, user);

        let client = self;
        let request = &request;
        RetryIf::spawn(
            retry_strategy(),
            move || async move {
                let result = client.generate_once(request).await;
                if let Err(e) = &result {
                    log::warn!("AI model call failed: {}", e);
                }
                result
            },
            GeminiError::is_retryable,
        )
        .await
    }
}

/// Backoff between attempts. Each delay is one retry, so a request is sent
/// at most `MAX_RETRIES + 1` times.
fn retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .take(MAX_RETRIES)
}

/// `{endpoint}/models/{model}:generateContent?key={api_key}`
fn generate_url(endpoint: &str, model: &str, api_key: &str) -> Result<Url> {
    let base = format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    );
    Url::parse_with_params(&base, &[("key", api_key)])
        .with_context(|| format!("Invalid Gemini endpoint: {}", endpoint))
}

fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

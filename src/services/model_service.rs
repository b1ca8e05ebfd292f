use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Closed classification of upstream-call failures. Produced from transport
/// and status information only; downstream code matches on the variant,
/// never on message text.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("authentication failure: {0}")]
    Auth(String),

    #[error("service failure (status {0}): {1}")]
    Service(u16, String),

    #[error("empty response from model")]
    EmptyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPart {
    #[serde(default)]
    pub text: String,
}

/// One turn of model input/output in the upstream wire format. The hosted
/// service only knows the roles "user" and "model".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelContent {
    pub role: String,
    pub parts: Vec<ModelPart>,
}

impl ModelContent {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![ModelPart { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![ModelPart { text: text.into() }],
        }
    }
}

/// Seam between the proxies and the hosted generative service. Constructed
/// once at startup and passed in; tests substitute a mock or a scripted
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send `contents` to the named model and return the concatenated text
    /// of the first candidate reply.
    async fn generate(&self, model: &str, contents: &[ModelContent]) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<ModelContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ModelContent>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the hosted `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn truncate(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, model: &str, contents: &[ModelContent]) -> Result<String, ModelError> {
        // Credential check happens before any I/O; a missing key must not
        // produce a network attempt.
        let key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ModelError::Auth("GEMINI_API_KEY is not configured".to_string()))?;

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let request = GenerateContentRequest {
            contents: contents.to_vec(),
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", key.expose_secret())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ModelError::Auth(format!(
                "upstream rejected credentials ({status})"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Service(status.as_u16(), truncate(&body)));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Service(status.as_u16(), e.to_string()))?;

        log::debug!("model {model} replied");
        payload.into_text().ok_or(ModelError::EmptyResponse)
    }
}

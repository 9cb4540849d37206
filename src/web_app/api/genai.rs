// web_app/api/genai.rs - Generative text client
//
// A single-prompt, single-reply client for the Gemini REST API, plus the
// helpers that turn a model reply into JSON.

use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::web_app::api::config::{create_client, AppConfig};
use crate::web_app::errors::FetchError;

/// Anything that can answer a natural-language prompt with text
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Returns `Ok(None)` when no Gemini key is configured
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, FetchError> {
        let Some(key) = config.gemini_api_key.clone() else {
            return Ok(None);
        };
        Ok(Some(Self::new(
            create_client(config)?,
            key,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
        )))
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Gemini returned HTTP {}: {}", status.as_u16(), detail);
            return Err(FetchError::from_status(status.as_u16(), detail));
        }

        let reply: Value = serde_json::from_str(&response.text().await?)?;
        reply
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FetchError::Malformed("reply has no candidate text".to_string()))
    }
}

/// An unconfigured generator fails every call with `NotConfigured`
impl<T: TextGenerator> TextGenerator for Option<T> {
    async fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        match self {
            Some(generator) => generator.generate(prompt).await,
            None => Err(FetchError::NotConfigured),
        }
    }
}

/// Remove a surrounding fenced code block (```json ... ```), if any
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Parse a model reply as JSON after stripping code fences
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(strip_code_fences(text)).map_err(|e| {
        tracing::warn!("Unparseable model reply: {}", e);
        FetchError::Malformed(e.to_string())
    })
}

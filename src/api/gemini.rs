//! Client for the Generative Language REST API.

use super::{GeneratorError, TextGenerator};
use crate::libs::config::GeneratorConfig;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;

/// Environment variable that takes precedence over the stored key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const SECRET_FILE: &str = ".gemini_secret";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize, Deserialize, Debug, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentRequest {
    fn single(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|part| part.text.as_deref()).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

pub struct Gemini {
    client: Client,
    api_url: String,
    api_key: String,
}

impl Gemini {
    pub fn new(config: &GeneratorConfig, api_key: impl Into<String>) -> Result<Self, GeneratorError> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Builds a client with the key from `GEMINI_API_KEY`, or from the
    /// encrypted secret file, prompting for it on first use.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let api_key = match env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => Self::secret()?.get_or_prompt()?,
        };
        Ok(Self::new(config, api_key)?)
    }

    /// Encrypted storage for the API key.
    pub fn secret() -> Result<Secret> {
        Secret::new(SECRET_FILE, &Message::PromptApiKey.to_string())
    }

    pub fn key_from_env() -> bool {
        env::var(API_KEY_ENV).is_ok_and(|key| !key.trim().is_empty())
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_url, model)
    }
}

impl TextGenerator for Gemini {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
        let url = self.endpoint(model);
        debug!(model, url = %url, "sending generation request");

        let res = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::single(prompt))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GeneratorError::Status { status: status.as_u16(), body });
        }

        res.json::<GenerateContentResponse>().await?.text().ok_or(GeneratorError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::single("olá")).unwrap();
        assert_eq!(body, serde_json::json!({ "contents": [{ "parts": [{ "text": "olá" }] }] }));
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":" Bom "},{"text":"trabalho! "}]}},{"content":{"parts":[{"text":"x"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("Bom trabalho!"));
    }

    #[test]
    fn response_without_text_is_none() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn endpoint_includes_model() {
        let config = GeneratorConfig {
            api_url: "https://example.test/v1beta/".to_string(),
            ..GeneratorConfig::default()
        };
        let gemini = Gemini::new(&config, "key").unwrap();
        assert_eq!(gemini.endpoint("gemini-3-flash-preview"), "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent");
    }
}

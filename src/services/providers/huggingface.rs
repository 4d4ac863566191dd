//! Hugging Face Inference API provider
//!
//! API Flow:
//! 1. POST {api_url}/{model} with `{"inputs": prompt, "parameters": {...}}`
//! 2. Response is usually `[{"generated_text": "..."}]`; summarization models
//!    answer with `summary_text` instead. Any other JSON shape is passed
//!    through as its serialized text.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;

use crate::{config::Config, error::GenerationError, services::providers::TextGenerator};

/// Prefix every valid inference token carries
const TOKEN_PREFIX: &str = "hf_";

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Clone)]
pub struct HuggingFaceClient {
    http_client: HttpClient,
    api_key: Option<String>,
    endpoint: String,
    max_new_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl HuggingFaceClient {
    pub fn new(
        api_key: Option<String>,
        endpoint: String,
        max_new_tokens: u32,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.map(|k| k.trim().to_string()),
            endpoint,
            max_new_tokens,
            temperature,
            timeout,
        }
    }

    /// Creates a client from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.hf_api_key.clone(),
            config.model_endpoint(),
            config.llm_max_new_tokens,
            config.llm_temperature,
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    /// Bearer header value, or a credential error when the key is absent or
    /// lacks the expected prefix
    fn bearer(&self) -> Result<String, GenerationError> {
        match self.api_key.as_deref() {
            Some(key) if key.starts_with(TOKEN_PREFIX) && key.len() > TOKEN_PREFIX.len() => {
                Ok(format!("Bearer {}", key))
            }
            _ => Err(GenerationError::Credential),
        }
    }

    /// Pulls the generated text out of a decoded response body
    fn extract_text(body: Value) -> String {
        if let Some(Value::Object(first)) = body.as_array().and_then(|items| items.first()) {
            return first
                .get("generated_text")
                .or_else(|| first.get("summary_text"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default();
        }

        body.to_string()
    }
}

#[async_trait::async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let bearer = self.bearer()?;

        let payload = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
            },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, bearer)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(GenerationError::Service {
                status: status.as_u16(),
                body: response_text,
            });
        }

        tracing::debug!(response = %response_text, "Raw inference API response");

        let body: Value = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize inference API response"
            );
            GenerationError::MalformedBody(e.to_string())
        })?;

        let text = Self::extract_text(body);

        tracing::info!(
            endpoint = %self.endpoint,
            chars = text.len(),
            provider = "huggingface",
            "Text generation completed"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_client(api_key: Option<&str>) -> HuggingFaceClient {
        HuggingFaceClient::new(
            api_key.map(str::to_string),
            // Nothing listens here; requests fail fast.
            "http://127.0.0.1:9/models/test".to_string(),
            200,
            0.7,
            Duration::from_secs(2),
        )
    }

    #[test]
    fn test_bearer_with_valid_key() {
        let client = create_test_client(Some(" hf_abc123 "));
        assert_eq!(client.bearer().unwrap(), "Bearer hf_abc123");
    }

    #[test]
    fn test_bearer_missing_key() {
        let client = create_test_client(None);
        assert!(matches!(client.bearer(), Err(GenerationError::Credential)));
    }

    #[test]
    fn test_bearer_wrong_prefix() {
        let client = create_test_client(Some("sk-abc123"));
        assert!(matches!(client.bearer(), Err(GenerationError::Credential)));
        let client = create_test_client(Some("hf_"));
        assert!(matches!(client.bearer(), Err(GenerationError::Credential)));
    }

    #[test]
    fn test_extract_generated_text() {
        let body = json!([{ "generated_text": "1. Vinyl record — classic" }]);
        assert_eq!(
            HuggingFaceClient::extract_text(body),
            "1. Vinyl record — classic"
        );
    }

    #[test]
    fn test_extract_summary_text() {
        let body = json!([{ "summary_text": "- Yoga mat" }]);
        assert_eq!(HuggingFaceClient::extract_text(body), "- Yoga mat");
    }

    #[test]
    fn test_extract_null_generated_text_is_empty() {
        let body = json!([{ "generated_text": null }]);
        assert_eq!(HuggingFaceClient::extract_text(body), "");
    }

    #[test]
    fn test_extract_object_without_text_is_empty() {
        let body = json!([{ "score": 0.9 }]);
        assert_eq!(HuggingFaceClient::extract_text(body), "");
    }

    #[test]
    fn test_extract_unexpected_shape_is_stringified() {
        let body = json!({ "error": "Model is loading" });
        assert_eq!(
            HuggingFaceClient::extract_text(body),
            r#"{"error":"Model is loading"}"#
        );
        assert_eq!(HuggingFaceClient::extract_text(json!([])), "[]");
    }

    #[test]
    fn test_request_serialization() {
        let payload = GenerationRequest {
            inputs: "hello",
            parameters: GenerationParameters {
                max_new_tokens: 200,
                temperature: 0.5,
            },
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "inputs": "hello", "parameters": { "max_new_tokens": 200, "temperature": 0.5 } })
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_never_hits_network() {
        let client = create_test_client(None);
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(GenerationError::Credential)));
    }

    #[tokio::test]
    async fn test_generate_transport_failure() {
        let client = create_test_client(Some("hf_test"));
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(GenerationError::Transport(_))));
    }
}

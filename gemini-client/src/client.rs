use std::time::Duration;

use tracing::debug;

use crate::error::{GeminiError, Result};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.0-flash";

/// Fixed timeout for the outbound call. Requests that exceed it surface as
/// transport errors; they are never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Async client for the generative-language `generateContent` endpoint.
///
/// Holds the API key injected at process start and a pooled `reqwest::Client`
/// with the fixed request timeout. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

// The API key travels as a URL query parameter, so keep it out of Debug output.
impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiClient {
    /// Create a client against the production API endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests to point at a
    /// mock server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Send a single prompt and return the model's free-text completion.
    ///
    /// One POST, no retries. A non-success status maps to
    /// [`GeminiError::UpstreamStatus`] without reading the body; a missing or
    /// malformed response envelope maps to [`GeminiError::Parse`].
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL);
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeminiError::UpstreamStatus(status.as_u16()));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = envelope
            .into_text()
            .ok_or_else(|| GeminiError::Parse("no completion text in response".to_string()))?;

        debug!(completion_len = text.len(), "received model completion");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn completion_envelope(text: &str) -> String {
        json!({ "candidates": [ { "content": { "parts": [ { "text": text } ] } } ] }).to_string()
    }

    #[tokio::test]
    async fn generate_content_returns_completion_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_envelope("hello from the model"))
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("test-key", server.url()).unwrap();
        let text = client.generate_content("say hello").await.unwrap();

        assert_eq!(text, "hello from the model");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_maps_to_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("test-key", server.url()).unwrap();
        let err = client.generate_content("prompt").await.unwrap_err();

        assert!(matches!(err, GeminiError::UpstreamStatus(500)));
        assert_eq!(err.to_string(), "API request failed with status code 500");
    }

    #[tokio::test]
    async fn missing_candidates_maps_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("test-key", server.url()).unwrap();
        let err = client.generate_content("prompt").await.unwrap_err();

        assert!(matches!(err, GeminiError::Parse(_)));
        assert!(
            err.to_string()
                .starts_with("Failed to parse AI response:")
        );
    }

    #[tokio::test]
    async fn invalid_envelope_body_maps_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not an envelope")
            .create_async()
            .await;

        let client = GeminiClient::with_base_url("test-key", server.url()).unwrap();
        let err = client.generate_content("prompt").await.unwrap_err();

        assert!(matches!(err, GeminiError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_transport_error() {
        // Port 9 (discard) is assumed closed; connection is refused immediately.
        let client = GeminiClient::with_base_url("test-key", "http://127.0.0.1:9").unwrap();
        let err = client.generate_content("prompt").await.unwrap_err();

        assert!(matches!(err, GeminiError::Transport(_)));
        assert!(err.to_string().starts_with("Request error:"));
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let client = GeminiClient::new("very-secret").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}

//! Gemini HTTP client core

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::warn;

use crate::config::{ApiConfig, Config};
use crate::error::ApiError;

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: ApiConfig,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from resolved configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_api_config(config.api.clone(), config.api_key.clone())
    }

    pub fn with_api_config(config: ApiConfig, api_key: String) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full `generateContent` URL for the configured model
    pub fn api_url(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// POST request with auth and content type applied
    pub(super) fn build_request(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .header("Content-Type", "application/json")
            .query(&[("key", self.api_key.as_str())])
    }

    /// Turn a non-success response into [`ApiError::Status`]
    pub(super) async fn handle_error_response(
        &self,
        response: Response,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        warn!(status = status.as_u16(), "Gemini request failed: {}", message);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull `error.message` out of a Google API error body
fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> GeminiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        GeminiClient::with_api_config(config, "key".to_string()).unwrap()
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            client("https://generativelanguage.googleapis.com").api_url(),
            "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(
            client("http://localhost:8080/").api_url(),
            "http://localhost:8080/v1/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body).as_deref(), Some("API key not valid."));
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", client("http://localhost"));
        assert!(!debug.contains("\"key\""));
        assert!(debug.contains("gemini-1.5-flash"));
    }
}

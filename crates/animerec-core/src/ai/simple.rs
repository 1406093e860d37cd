//! Simple (non-streaming) generation call

use serde_json::Value;
use tracing::{debug, info};

use super::client::GeminiClient;
use super::response::extract_text;
use crate::error::ApiError;

impl GeminiClient {
    /// Send one user prompt and return the response text.
    ///
    /// A well-formed reply with no text yields the fallback message rather
    /// than an error.
    pub async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let body = self.request_body(prompt);
        let url = self.api_url();
        debug!(
            model = %self.config().model,
            prompt_len = prompt.len(),
            "Gemini generateContent call"
        );

        let response = self
            .build_request(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = self.handle_error_response(response).await?;

        let json: Value = response.json().await.map_err(ApiError::Decode)?;
        let text = extract_text(&json);
        info!(response_len = text.len(), "Gemini response received");

        Ok(text)
    }

    fn request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": self.config().temperature,
                "maxOutputTokens": self.config().max_output_tokens
            }
        })
    }
}

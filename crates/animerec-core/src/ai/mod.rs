//! Generative-language API access
//!
//! One provider (Gemini `generateContent`), one non-streaming call per query.

mod client;
mod response;
mod simple;

use async_trait::async_trait;

use crate::error::ApiError;

pub use client::GeminiClient;
pub use response::{extract_text, NO_CONTENT_FALLBACK};

/// Something that turns a prompt into response text
///
/// The TUI and the one-shot command depend on this seam rather than on
/// [`GeminiClient`] directly.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.generate(prompt).await
    }
}

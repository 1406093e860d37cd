//! Core library for animerec
//!
//! - Markup-lite rendering of model responses into styled runs
//! - Prompt construction and the per-user query session
//! - Gemini `generateContent` client
//! - Layered configuration

pub mod ai;
pub mod config;
pub mod error;
pub mod markup;
pub mod prompt;
pub mod session;

pub use ai::{CompletionBackend, GeminiClient};
pub use config::Config;
pub use error::{ApiError, ConfigError, SessionError};
pub use markup::{render, render_with, RenderOptions, RunStyle, StyledRun};
pub use prompt::PromptBuilder;
pub use session::Session;

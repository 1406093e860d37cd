//! Error types
//!
//! Markup rendering never fails, so every variant here belongs to the
//! surrounding application: configuration, the HTTP call, and the session.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration could not be assembled
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Google Gemini API key not set. Set {env} or add it to your .env file.")]
    MissingApiKey { env: &'static str },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A request to the generative-language API failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, TLS, or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not valid JSON
    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the failure was the client-side timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            ApiError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// The session cannot serve the request yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No anime name stored. Please generate a recommendation first.")]
    NoSubject,
}

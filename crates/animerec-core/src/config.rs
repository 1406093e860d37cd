//! Configuration loading
//!
//! Sources, lowest precedence first: built-in defaults, the TOML config file,
//! `.env` plus the process environment. CLI flags are applied by the binary.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::markup::RenderOptions;
use crate::prompt::{PromptBuilder, DEFAULT_REFERENCE_SITE};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_GEMINI_API_KEY";
/// Overrides `api.model`
pub const MODEL_ENV: &str = "ANIMEREC_MODEL";
/// Overrides `api.base_url`
pub const BASE_URL_ENV: &str = "ANIMEREC_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_THEME: &str = "darkly";

/// Generation endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 1024,
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub reference_site: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            reference_site: DEFAULT_REFERENCE_SITE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Expand bold spans inside bullet lines
    pub bold_in_bullets: bool,
    /// Show the first response line as a header
    pub title_first_line: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// On-disk shape of `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api: ApiConfig,
    prompt: PromptConfig,
    render: RenderConfig,
    ui: UiConfig,
}

/// Fully resolved configuration
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api: ApiConfig,
    pub prompt: PromptConfig,
    pub render: RenderConfig,
    pub ui: UiConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api", &self.api)
            .field("prompt", &self.prompt)
            .field("render", &self.render)
            .field("ui", &self.ui)
            .finish()
    }
}

impl Config {
    /// Default config file location: `<config dir>/animerec/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("animerec").join("config.toml"))
    }

    /// Load from `.env`, the environment, and an optional config file.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(env_file) = dotenv::dotenv() {
            debug!("Loaded environment from {:?}", env_file);
        }

        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve configuration from a config file and an environment lookup
    pub fn from_sources(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file_config = match file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Loaded config file {:?}", path);
                toml::from_str::<FileConfig>(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => FileConfig::default(),
        };

        let api_key = env(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey { env: API_KEY_ENV })?;

        let mut config = Self {
            api_key,
            api: file_config.api,
            prompt: file_config.prompt,
            render: file_config.render,
            ui: file_config.ui,
        };

        if let Some(model) = env(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            config.api.model = model.trim().to_string();
        }
        if let Some(url) = env(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.api.base_url = url.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.model",
                reason: "must not be empty".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.api.temperature) {
            return Err(ConfigError::Invalid {
                field: "api.temperature",
                reason: format!("{} is outside 0.0..=2.0", self.api.temperature),
            });
        }
        if self.api.max_output_tokens == 0 {
            return Err(ConfigError::Invalid {
                field: "api.max_output_tokens",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "api.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::new(self.prompt.reference_site.clone())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            bold_in_bullets: self.render.bold_in_bullets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_with(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_key() {
        let config = Config::from_sources(None, env_with(&[(API_KEY_ENV, "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.prompt.reference_site, DEFAULT_REFERENCE_SITE);
        assert!(!config.render.bold_in_bullets);
        assert_eq!(config.ui.theme, "darkly");
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_sources(None, env_with(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));

        let err = Config::from_sources(None, env_with(&[(API_KEY_ENV, "   ")])).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_file_and_env_layering() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
model = "gemini-file"
temperature = 0.2

[render]
bold_in_bullets = true

[ui]
theme = "terminal"
"#
        )
        .unwrap();

        let config = Config::from_sources(
            Some(file.path()),
            env_with(&[(API_KEY_ENV, "k"), (BASE_URL_ENV, "http://127.0.0.1:9")]),
        )
        .unwrap();

        assert_eq!(config.api.model, "gemini-file");
        assert_eq!(config.api.temperature, 0.2);
        assert_eq!(config.api.max_output_tokens, 1024);
        assert_eq!(config.api.base_url, "http://127.0.0.1:9");
        assert!(config.render_options().bold_in_bullets);
        assert_eq!(config.ui.theme, "terminal");

        let config = Config::from_sources(
            Some(file.path()),
            env_with(&[(API_KEY_ENV, "k"), (MODEL_ENV, "gemini-env")]),
        )
        .unwrap();
        assert_eq!(config.api.model, "gemini-env");
    }

    #[test]
    fn test_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntemperature = 3.5").unwrap();
        let err = Config::from_sources(Some(file.path()), env_with(&[(API_KEY_ENV, "k")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "api.temperature",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nmodel = ").unwrap();
        let err = Config::from_sources(Some(file.path()), env_with(&[(API_KEY_ENV, "k")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_sources(None, env_with(&[(API_KEY_ENV, "secret-key")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}

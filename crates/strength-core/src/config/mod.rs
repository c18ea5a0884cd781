//! Configuration management for StrengthScience.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `strength.toml` file
//! 3. User config `~/.config/strength-science/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration.
    pub llm: LLMConfig,

    /// Review and chat configuration.
    pub research: ResearchConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./strength.toml` (project local)
    /// 2. `~/.config/strength-science/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(provider) = std::env::var("STRENGTH_LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Ok(model) = std::env::var("STRENGTH_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Ok(url) = std::env::var("STRENGTH_LLM_BASE_URL") {
            self.llm.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("STRENGTH_LLM_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Ok(tokens) = std::env::var("STRENGTH_LLM_MAX_TOKENS") {
            if let Ok(n) = tokens.parse() {
                self.llm.max_tokens = n;
            }
        }

        if let Ok(language) = std::env::var("STRENGTH_LANGUAGE") {
            self.research.language = language;
        }

        if let Ok(level) = std::env::var("STRENGTH_LOG") {
            self.logging.level = level;
        }
        if let Ok(file) = std::env::var("STRENGTH_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_PROVIDERS.contains(&self.llm.provider.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "llm.provider must be one of {}, got \"{}\"",
                SUPPORTED_PROVIDERS.join(", "),
                self.llm.provider
            )));
        }
        if !(0.0..=2.0).contains(&self.research.temperature) {
            return Err(ConfigError::Invalid(format!(
                "research.temperature must be between 0.0 and 2.0, got {}",
                self.research.temperature
            )));
        }
        if self.research.language.trim().is_empty() {
            return Err(ConfigError::Invalid("research.language must not be empty".to_string()));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    /// Provider name: "gemini", "openai", or "ollama".
    pub provider: String,

    /// Model name (provider-specific).
    pub model: Option<String>,

    /// Base URL for API.
    pub base_url: Option<String>,

    /// API key (can also be set via environment variable).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Maximum tokens for response.
    pub max_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_LLM_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl LLMConfig {
    /// Get the model name, falling back to provider defaults.
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| {
            match self.provider.as_str() {
                "openai" => DEFAULT_OPENAI_MODEL.to_string(),
                "ollama" => DEFAULT_OLLAMA_MODEL.to_string(),
                _ => DEFAULT_GEMINI_MODEL.to_string(),
            }
        })
    }

    /// Get API key from config or environment.
    pub fn api_key_or_env(&self) -> Option<String> {
        self.api_key.clone()
            .or_else(|| std::env::var("STRENGTH_LLM_API_KEY").ok())
            .or_else(|| match self.provider.as_str() {
                "openai" => std::env::var("OPENAI_API_KEY").ok(),
                "ollama" => None,
                _ => std::env::var("GEMINI_API_KEY")
                    .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                    .or_else(|_| std::env::var("API_KEY"))
                    .ok(),
            })
    }
}

/// Review and chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// System instruction override.
    /// If not set, uses the built-in default.
    pub system_prompt: Option<String>,

    /// Language every answer must be written in.
    pub language: String,

    /// Sampling temperature for literature reviews.
    pub temperature: f32,

    /// Sampling temperature for chat turns (provider default when unset).
    pub chat_temperature: Option<f32>,

    /// Whether to enable the provider's web search tool.
    pub web_search: bool,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
            language: DEFAULT_LANGUAGE.to_string(),
            temperature: DEFAULT_REVIEW_TEMPERATURE,
            chat_temperature: None,
            web_search: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "strength_core=debug".
    pub level: String,

    /// Log file used while the terminal UI owns the screen.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Get the log file path, falling back to the platform data dir.
    pub fn file_or_default(&self) -> PathBuf {
        self.file.as_ref().map(PathBuf::from).unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR_NAME)
                .join(DEFAULT_LOG_FILE_NAME)
        })
    }
}

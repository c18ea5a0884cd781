use crate::config::{LLMConfig, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL};
use super::{GeminiClient, LLMError, OpenAIClient, LLM};

/// LLM Provider configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini with search grounding (default)
    Gemini {
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
    },
    /// OpenAI-compatible endpoint
    OpenAI {
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
    },
    /// Local Ollama instance
    Ollama {
        base_url: Option<String>,
        model: String,
    },
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Gemini {
            base_url: None,
            api_key: None,
            model: None,
            max_tokens: None,
        }
    }
}

impl Provider {
    /// Creates a provider from LLMConfig.
    ///
    /// Fails with `UnknownProvider` for names outside `SUPPORTED_PROVIDERS`.
    pub fn from_config(config: &LLMConfig) -> Result<Self, LLMError> {
        let provider = match config.provider.as_str() {
            "openai" | "openai-compatible" => Provider::OpenAI {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
                max_tokens: Some(config.max_tokens),
            },
            "ollama" => Provider::Ollama {
                base_url: config.base_url.clone(),
                model: config.model_or_default(),
            },
            "gemini" | "google" => Provider::Gemini {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
                max_tokens: Some(config.max_tokens),
            },
            other => return Err(LLMError::UnknownProvider(other.to_string())),
        };
        Ok(provider)
    }

    /// Creates an LLM client from the provider configuration.
    pub fn build(self) -> Result<Box<dyn LLM>, LLMError> {
        match self {
            Provider::Gemini { base_url, api_key, model, max_tokens } => {
                let key = api_key
                    .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                    .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
                    .filter(|k| !k.is_empty())
                    .ok_or(LLMError::MissingApiKey)?;

                let mdl = model
                    .or_else(|| std::env::var("GEMINI_MODEL").ok())
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

                let mut client = GeminiClient::new(key).with_model(mdl);
                if let Some(url) = base_url {
                    client = client.with_base_url(url);
                }
                if let Some(n) = max_tokens {
                    client = client.with_max_tokens(n);
                }
                Ok(Box::new(client))
            }

            Provider::OpenAI { base_url, api_key, model, max_tokens } => {
                let key = api_key
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .unwrap_or_default();

                let mdl = model
                    .or_else(|| std::env::var("OPENAI_MODEL").ok())
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

                let client = match base_url.or_else(|| std::env::var("OPENAI_BASE_URL").ok()) {
                    Some(base) => OpenAIClient::new(base, key, mdl),
                    None => OpenAIClient::openai(key, mdl),
                };
                let client = match max_tokens {
                    Some(n) => client.with_max_tokens(n),
                    None => client,
                };
                Ok(Box::new(client))
            }

            Provider::Ollama { base_url, model } => {
                let base = base_url.or_else(|| {
                    std::env::var("OLLAMA_HOST")
                        .ok()
                        .map(|h| format!("{}/v1", h.trim_end_matches('/')))
                });

                match base {
                    Some(base) => Ok(Box::new(OpenAIClient::new(base, "", model))),
                    None => Ok(Box::new(OpenAIClient::ollama(model))),
                }
            }
        }
    }
}

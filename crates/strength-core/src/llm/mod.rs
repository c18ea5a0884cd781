mod error;
mod gemini;
mod openai;
mod provider;

pub use error::LLMError;
pub use gemini::GeminiClient;
pub use openai::OpenAIClient;
pub use provider::Provider;

use async_trait::async_trait;

use crate::sources::GroundingMetadata;

/// Who authored a turn of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

/// One prior turn replayed to the model as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Model, text: text.into() }
    }
}

/// A single generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// System instruction applied to the whole exchange.
    pub system: Option<String>,
    /// Prior conversation, oldest first.
    pub history: Vec<Turn>,
    /// The new user message.
    pub prompt: String,
    /// Whether the provider's web search tool should be enabled.
    pub web_search: bool,
    /// Sampling temperature; provider default when `None`.
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a request for a single prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_history(mut self, history: Vec<Turn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

/// What came back from the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelResponse {
    /// Response text; empty if the model produced none.
    pub text: String,
    /// Citations, when the provider ran a grounded search.
    pub grounding: Option<GroundingMetadata>,
}

/// Trait for Large Language Model providers.
///
/// This abstraction allows swapping between different LLM providers
/// without changing the rest of the code.
///
/// # Supported Providers
///
/// - **Gemini** (default): Google Generative Language API with Google Search grounding
/// - **OpenAI-compatible**: OpenAI, Azure, vLLM, OpenRouter, etc. (no grounding)
/// - **Ollama**: Local models via Ollama's OpenAI-compatible endpoint
///
/// # Example
///
/// ```ignore
/// use strength_core::llm::{GenerateRequest, Provider, LLM};
///
/// let llm = Provider::from_config(&config.llm)?.build()?;
/// let request = GenerateRequest::new("Velocity based training").with_web_search(true);
/// let response = llm.generate(&request).await?;
/// ```
#[async_trait]
pub trait LLM: Send + Sync {
    /// Run one generation.
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelResponse, LLMError>;

    /// Returns true if this provider can ground answers with web search.
    fn supports_web_search(&self) -> bool {
        false
    }

    /// Short label used in logs and the status bar.
    fn name(&self) -> String;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl LLM for Box<dyn LLM> {
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelResponse, LLMError> {
        (**self).generate(request).await
    }

    fn supports_web_search(&self) -> bool {
        (**self).supports_web_search()
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

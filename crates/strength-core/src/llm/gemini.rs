use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerateRequest, LLMError, ModelResponse, TurnRole, LLM};
use crate::config::{DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL, DEFAULT_MAX_TOKENS};
use crate::sources::GroundingMetadata;

/// Google Gemini API client.
///
/// Talks to the `generateContent` endpoint and can enable the Google Search
/// tool, in which case the response carries grounding metadata.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl GeminiClient {
    /// Creates a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            client: Client::new(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the maximum tokens for responses.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the API base URL (for proxies or regional endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_body(&self, request: &GenerateRequest) -> GeminiRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content::new(role_name(turn.role), &turn.text))
            .collect();
        contents.push(Content::new("user", &request.prompt));

        GeminiRequest {
            system_instruction: request.system.as_deref().map(|s| Content {
                role: None,
                parts: vec![Part { text: Some(s.to_string()) }],
            }),
            contents,
            tools: if request.web_search {
                vec![Tool { google_search: GoogleSearch {} }]
            } else {
                Vec::new()
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: Some(self.max_tokens),
            },
        }
    }

    async fn send_request(&self, body: &GeminiRequest) -> Result<GeminiResponse, LLMError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if status == 429 {
            return Err(LLMError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl LLM for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelResponse, LLMError> {
        let body = self.build_body(request);
        debug!(
            model = %self.model,
            turns = body.contents.len(),
            web_search = request.web_search,
            "sending generateContent request"
        );

        let response = self.send_request(&body).await?;
        Ok(response.into_model_response())
    }

    fn supports_web_search(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        format!("Gemini ({})", self.model)
    }
}

fn role_name(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Model => "model",
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn new(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: Some(text.to_string()) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

impl GeminiResponse {
    /// Text is the concatenation of the first candidate's text parts.
    fn into_model_response(self) -> ModelResponse {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return ModelResponse::default();
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        ModelResponse {
            text,
            grounding: candidate.grounding_metadata,
        }
    }
}

//! Shared fakes for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use strength_core::llm::{GenerateRequest, LLMError, ModelResponse, LLM};
use strength_core::{GroundingChunk, GroundingMetadata};

/// Canned-response LLM that records every request it receives.
pub struct FakeLLM {
    text: String,
    grounding: Option<GroundingMetadata>,
    fail: bool,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl FakeLLM {
    pub fn replying(text: &str) -> Self {
        Self {
            text: text.to_string(),
            grounding: None,
            fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::replying("")
        }
    }

    pub fn with_sources(mut self, uris: &[&str]) -> Self {
        let chunks = uris.iter().map(|u| GroundingChunk::web(*u, Some(*u))).collect();
        self.grounding = Some(GroundingMetadata::new(chunks));
        self
    }
}

#[async_trait]
impl LLM for FakeLLM {
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelResponse, LLMError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(LLMError::ApiError {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(ModelResponse {
            text: self.text.clone(),
            grounding: self.grounding.clone(),
        })
    }

    fn supports_web_search(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        "fake".to_string()
    }
}

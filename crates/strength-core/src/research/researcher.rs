use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{ResearchConfig, EMPTY_REVIEW_FALLBACK};
use crate::llm::{GenerateRequest, LLMError, LLM};
use crate::research::chat::ChatMessage;
use crate::research::prompts::{build_review_prompt, build_system_instruction};
use crate::research::{Category, Report};

/// Produces a literature review for a topic.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn review(&self, topic: &str, category: Category) -> Result<Report, ResearchError>;
}

/// Answers one chat turn given the prior conversation.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// `history` is the conversation before `message`, oldest first.
    async fn reply(&self, history: &[ChatMessage], message: &str) -> Result<ChatMessage, ResearchError>;
}

/// Runs reviews and chat turns against an LLM.
pub struct Researcher<L: LLM> {
    llm: L,
    settings: ResearchConfig,
    system_instruction: String,
}

impl<L: LLM> Researcher<L> {
    /// Creates a new researcher.
    pub fn new(llm: L, settings: ResearchConfig) -> Self {
        let system_instruction =
            build_system_instruction(settings.system_prompt.as_deref(), &settings.language);
        Self {
            llm,
            settings,
            system_instruction,
        }
    }

    /// The system instruction sent with every request.
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Label of the underlying model.
    pub fn model_name(&self) -> String {
        self.llm.name()
    }
}

#[async_trait]
impl<L: LLM> ReviewService for Researcher<L> {
    async fn review(&self, topic: &str, category: Category) -> Result<Report, ResearchError> {
        info!(topic, category = category.key(), model = %self.llm.name(), "starting literature review");

        let prompt = build_review_prompt(topic, category, &self.settings.language);
        let request = GenerateRequest::new(prompt)
            .with_system(self.system_instruction.as_str())
            .with_web_search(self.settings.web_search)
            .with_temperature(Some(self.settings.temperature));

        let response = self.llm.generate(&request).await.map_err(|e| {
            error!(topic, error = %e, "literature review failed");
            ResearchError::from(e)
        })?;

        let summary = if response.text.is_empty() {
            EMPTY_REVIEW_FALLBACK.to_string()
        } else {
            response.text
        };

        let report = Report::new(topic, category, summary, response.grounding);
        info!(
            report_id = %report.id,
            sources = report.sources().len(),
            "literature review complete"
        );
        Ok(report)
    }
}

#[async_trait]
impl<L: LLM> ChatService for Researcher<L> {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> Result<ChatMessage, ResearchError> {
        info!(turns = history.len(), model = %self.llm.name(), "sending chat turn");

        let request = GenerateRequest::new(message)
            .with_system(self.system_instruction.as_str())
            .with_history(history.iter().map(ChatMessage::to_turn).collect())
            .with_web_search(self.settings.web_search)
            .with_temperature(self.settings.chat_temperature);

        let response = self.llm.generate(&request).await.map_err(|e| {
            error!(error = %e, "chat turn failed");
            ResearchError::from(e)
        })?;

        Ok(ChatMessage::model(response.text).with_grounding(response.grounding))
    }
}

/// Errors that can occur during a review or chat turn.
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("LLM error: {0}")]
    LLM(#[from] LLMError),
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm::Turn;
use crate::sources::{GroundingMetadata, SourceLink};

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Model => "Coach",
        }
    }
}

/// A chat message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    /// Raw text or Markdown
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding: Option<GroundingMetadata>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            grounding: None,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Role::Model, content.into())
    }

    pub fn with_grounding(mut self, grounding: Option<GroundingMetadata>) -> Self {
        self.grounding = grounding;
        self
    }

    /// Deduplicated sources; empty for user messages and ungrounded replies.
    pub fn sources(&self) -> Vec<SourceLink> {
        self.grounding.as_ref().map(GroundingMetadata::sources).unwrap_or_default()
    }

    /// This message as a turn of model context.
    pub fn to_turn(&self) -> Turn {
        match self.role {
            Role::User => Turn::user(&self.content),
            Role::Model => Turn::model(&self.content),
        }
    }
}

/// Append-only conversation transcript.
///
/// Insertion order is the order replayed to the model on every turn.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent model message, if any.
    pub fn last_model_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == Role::Model)
    }
}

pub mod config;
pub mod llm;
pub mod markdown;
pub mod research;
pub mod session;
pub mod sources;

pub use config::{Config, ConfigError, LLMConfig, LoggingConfig, ResearchConfig};
pub use llm::{GenerateRequest, LLMError, ModelResponse, Provider, LLM};
pub use markdown::{Block, Inline};
pub use research::{
    Category, ChatMessage, ChatService, Conversation, Report, ResearchError, Researcher,
    ReviewService, Role,
};
pub use session::{ChatRequest, ReviewRequest, Session, Tab};
pub use sources::{GroundingChunk, GroundingMetadata, SourceLink};

mod category;
mod chat;
pub mod prompts;
mod report;
mod researcher;

pub use category::Category;
pub use chat::{ChatMessage, Conversation, Role};
pub use report::Report;
pub use researcher::{ChatService, ResearchError, Researcher, ReviewService};

//! UI state container.
//!
//! One `Session` is owned by the view layer. Every change goes through a
//! transition method (`submit_*`, `complete_*`, `switch_tab`, ...) so the
//! same rules hold for any front end.

use tracing::{error, warn};

use crate::config::{CHAT_FAILURE_MESSAGE, REVIEW_FAILURE_MESSAGE};
use crate::research::{Category, ChatMessage, Conversation, Report, ResearchError};

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Research,
    Chat,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Self::Research => Self::Chat,
            Self::Chat => Self::Research,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Research => "研究文獻庫",
            Self::Chat => "AI 教練問答",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Research => 0,
            Self::Chat => 1,
        }
    }
}

/// A suggested topic offered while no report is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        title: "提升衝刺速度",
        description: "探討阻力雪橇與增強式訓練的最佳劑量反應關係。",
    },
    Suggestion {
        title: "肌肥大機制",
        description: "比較機械張力與代謝壓力在不同訓練課表的角色。",
    },
    Suggestion {
        title: "運動員恢復",
        description: "睡眠、營養與冷療對於菁英運動員的實際效益分析。",
    },
];

/// A blocking message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// A review the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub topic: String,
    pub category: Category,
}

/// A chat turn the caller should run.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation before `message`.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// Research tab state.
#[derive(Debug, Clone, Default)]
pub struct ResearchState {
    pub topic: String,
    pub category: Category,
    pub report: Option<Report>,
    pub busy: bool,
}

/// Chat tab state.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub input: String,
    pub conversation: Conversation,
    pub busy: bool,
}

/// The whole UI state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub tab: Tab,
    pub research: ResearchState,
    pub chat: ChatState,
    pub notification: Option<Notification>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn select_category(&mut self, category: Category) {
        self.research.category = category;
    }

    pub fn next_category(&mut self) {
        self.select_category(self.research.category.next());
    }

    pub fn previous_category(&mut self) {
        self.select_category(self.research.category.previous());
    }

    /// Fills the topic from a suggestion card. Returns false for an unknown index.
    pub fn use_suggestion(&mut self, index: usize) -> bool {
        match SUGGESTIONS.get(index) {
            Some(s) => {
                self.research.topic = s.title.to_string();
                true
            }
            None => false,
        }
    }

    /// Whether the research tab should show the suggestion cards.
    pub fn shows_suggestions(&self) -> bool {
        self.research.report.is_none() && !self.research.busy
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Starts a review of the current topic.
    ///
    /// Returns `None` without touching any state when a review is already
    /// running or the topic is blank.
    pub fn submit_review(&mut self) -> Option<ReviewRequest> {
        if self.research.busy || self.research.topic.trim().is_empty() {
            return None;
        }

        self.research.busy = true;
        self.research.report = None;
        self.notification = None;

        Some(ReviewRequest {
            topic: self.research.topic.clone(),
            category: self.research.category,
        })
    }

    /// Applies the outcome of a review.
    pub fn complete_review(&mut self, result: Result<Report, ResearchError>) {
        if !self.research.busy {
            warn!("review completed while none was pending");
        }
        self.research.busy = false;

        match result {
            Ok(report) => self.research.report = Some(report),
            Err(e) => {
                error!(error = %e, "review request failed");
                self.notification = Some(Notification {
                    message: REVIEW_FAILURE_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Sends the chat input.
    ///
    /// Appends exactly one user message and returns the request to run.
    /// Returns `None` without touching any state when a turn is already
    /// running or the input is blank.
    pub fn submit_chat(&mut self) -> Option<ChatRequest> {
        if self.chat.busy || self.chat.input.trim().is_empty() {
            return None;
        }

        let message = std::mem::take(&mut self.chat.input);
        let history = self.chat.conversation.messages().to_vec();

        self.chat.conversation.push(ChatMessage::user(message.clone()));
        self.chat.busy = true;

        Some(ChatRequest { history, message })
    }

    /// Applies the outcome of a chat turn.
    ///
    /// Appends exactly one model message: the reply, or an apology when the
    /// turn failed.
    pub fn complete_chat(&mut self, result: Result<ChatMessage, ResearchError>) {
        if !self.chat.busy {
            warn!("chat turn completed while none was pending");
        }
        self.chat.busy = false;

        let message = match result {
            Ok(message) => message,
            Err(e) => {
                error!(error = %e, "chat request failed");
                ChatMessage::model(CHAT_FAILURE_MESSAGE)
            }
        };
        self.chat.conversation.push(message);
    }
}

mod common;

use common::FakeLLM;
use strength_core::config::{CHAT_FAILURE_MESSAGE, REVIEW_FAILURE_MESSAGE};
use strength_core::{
    Category, ChatService, LLMError, Report, ResearchConfig, ResearchError, Researcher,
    ReviewService, Role, Session,
};

fn failure() -> ResearchError {
    ResearchError::LLM(LLMError::Network("connection reset".to_string()))
}

#[test]
fn test_blank_topic_is_noop() {
    let mut session = Session::new();
    session.research.topic = "   \t".to_string();

    assert!(session.submit_review().is_none());
    assert!(!session.research.busy);
    assert!(session.notification.is_none());
}

#[test]
fn test_submit_review_sets_busy_and_clears_report() {
    let mut session = Session::new();
    session.research.report = Some(Report::new("old", Category::Strength, "old", None));
    session.research.topic = "sprint speed".to_string();
    session.select_category(Category::Power);

    let request = session.submit_review().unwrap();

    assert_eq!(request.topic, "sprint speed");
    assert_eq!(request.category, Category::Power);
    assert!(session.research.busy);
    assert!(session.research.report.is_none());
    assert!(!session.shows_suggestions());
    assert_eq!(session.research.topic, "sprint speed");

    // A second submit while busy is ignored.
    assert!(session.submit_review().is_none());
}

#[test]
fn test_review_failure_sets_notification_without_report() {
    let mut session = Session::new();
    session.research.topic = "sleep".to_string();
    session.submit_review().unwrap();

    session.complete_review(Err(failure()));

    assert!(!session.research.busy);
    assert!(session.research.report.is_none());
    assert_eq!(
        session.notification.as_ref().map(|n| n.message.as_str()),
        Some(REVIEW_FAILURE_MESSAGE)
    );

    session.dismiss_notification();
    assert!(session.notification.is_none());
}

#[test]
fn test_blank_chat_is_noop() {
    let mut session = Session::new();
    session.chat.input = "  ".to_string();

    assert!(session.submit_chat().is_none());
    assert!(session.chat.conversation.is_empty());
    assert!(!session.chat.busy);
}

#[test]
fn test_chat_failure_appends_single_apology() {
    let mut session = Session::new();
    session.chat.input = "How many sets?".to_string();

    let request = session.submit_chat().unwrap();
    assert!(request.history.is_empty());
    assert_eq!(session.chat.conversation.len(), 1);
    assert!(session.chat.input.is_empty());

    session.complete_chat(Err(failure()));

    let messages = session.chat.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, Role::Model);
    assert_eq!(messages[1].content, CHAT_FAILURE_MESSAGE);
    assert!(session.notification.is_none());
    assert!(!session.chat.busy);
}

#[test]
fn test_chat_busy_blocks_second_submit() {
    let mut session = Session::new();
    session.chat.input = "first".to_string();
    session.submit_chat().unwrap();

    session.chat.input = "second".to_string();
    assert!(session.submit_chat().is_none());
    assert_eq!(session.chat.conversation.len(), 1);
    assert_eq!(session.chat.input, "second");
}

#[tokio::test]
async fn test_review_round_trip_through_service() {
    let researcher = Researcher::new(
        FakeLLM::replying("## Summary\nbody").with_sources(&["https://x.org"]),
        ResearchConfig::default(),
    );
    let mut session = Session::new();
    assert!(session.shows_suggestions());
    session.research.topic = "hypertrophy".to_string();

    let request = session.submit_review().unwrap();
    let result = researcher.review(&request.topic, request.category).await;
    session.complete_review(result);

    let report = session.research.report.as_ref().unwrap();
    assert_eq!(report.topic, "hypertrophy");
    assert_eq!(report.sources().len(), 1);
    assert!(session.notification.is_none());
    assert!(!session.shows_suggestions());
}

#[tokio::test]
async fn test_chat_turns_alternate_and_replay_history() {
    let llm = FakeLLM::replying("answer");
    let requests = llm.requests.clone();
    let researcher = Researcher::new(llm, ResearchConfig::default());
    let mut session = Session::new();

    for question in ["q1", "q2"] {
        session.chat.input = question.to_string();
        let request = session.submit_chat().unwrap();
        let result = researcher.reply(&request.history, &request.message).await;
        session.complete_chat(result);
    }

    let roles: Vec<Role> = session.chat.conversation.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);

    // The second turn saw the first exchange as history, not itself.
    let requests = requests.lock().unwrap();
    assert_eq!(requests[1].history.len(), 2);
    assert_eq!(requests[1].prompt, "q2");
}

mod common;

use common::FakeLLM;
use strength_core::config::{DEFAULT_REVIEW_TEMPERATURE, EMPTY_REVIEW_FALLBACK};
use strength_core::llm::TurnRole;
use strength_core::{
    Category, ChatMessage, ChatService, ResearchConfig, ResearchError, Researcher, ReviewService,
    Role,
};

#[tokio::test]
async fn test_review_maps_response_into_report() {
    let llm = FakeLLM::replying("## 文獻綜述摘要\n- **VBT** improves power")
        .with_sources(&["https://a.org", "https://b.org", "https://a.org"]);
    let requests = llm.requests.clone();
    let researcher = Researcher::new(llm, ResearchConfig::default());

    let report = researcher.review("VBT 訓練效果", Category::Power).await.unwrap();

    assert_eq!(report.topic, "VBT 訓練效果");
    assert_eq!(report.category, Category::Power);
    assert!(report.summary.starts_with("## 文獻綜述摘要"));
    assert_eq!(report.sources().len(), 2);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.web_search);
    assert_eq!(request.temperature, Some(DEFAULT_REVIEW_TEMPERATURE));
    assert!(request.history.is_empty());
    assert!(request.prompt.contains("\"VBT 訓練效果\""));
    assert!(request.prompt.contains("爆發力"));
    assert_eq!(request.system.as_deref(), Some(researcher.system_instruction()));
}

#[tokio::test]
async fn test_review_empty_text_uses_fallback() {
    let researcher = Researcher::new(FakeLLM::replying(""), ResearchConfig::default());

    let report = researcher.review("sleep", Category::Recovery).await.unwrap();

    assert_eq!(report.summary, EMPTY_REVIEW_FALLBACK);
    assert!(report.sources().is_empty());
}

#[tokio::test]
async fn test_review_failure_propagates() {
    let researcher = Researcher::new(FakeLLM::failing(), ResearchConfig::default());

    let result = researcher.review("sleep", Category::Recovery).await;

    assert!(matches!(result, Err(ResearchError::LLM(_))));
}

#[tokio::test]
async fn test_reports_have_unique_ids() {
    let researcher = Researcher::new(FakeLLM::replying("text"), ResearchConfig::default());

    let a = researcher.review("t", Category::Strength).await.unwrap();
    let b = researcher.review("t", Category::Strength).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_chat_replays_history() {
    let llm = FakeLLM::replying("Use 3x5 at 85%.").with_sources(&["https://c.org"]);
    let requests = llm.requests.clone();
    let researcher = Researcher::new(llm, ResearchConfig::default());

    let history = vec![ChatMessage::user("How heavy?"), ChatMessage::model("Depends.")];
    let reply = researcher.reply(&history, "For a novice?").await.unwrap();

    assert_eq!(reply.role, Role::Model);
    assert_eq!(reply.content, "Use 3x5 at 85%.");
    assert_eq!(reply.sources().len(), 1);

    let requests = requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.prompt, "For a novice?");
    let roles: Vec<TurnRole> = request.history.iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![TurnRole::User, TurnRole::Model]);
    assert!(request.web_search);
    assert_eq!(request.temperature, None);
}

#[tokio::test]
async fn test_chat_keeps_empty_reply() {
    let researcher = Researcher::new(FakeLLM::replying(""), ResearchConfig::default());

    let reply = researcher.reply(&[], "hello").await.unwrap();

    assert!(reply.content.is_empty());
}

#[tokio::test]
async fn test_language_and_search_settings_respected() {
    let llm = FakeLLM::replying("ok");
    let requests = llm.requests.clone();
    let settings = ResearchConfig {
        language: "English".to_string(),
        web_search: false,
        ..Default::default()
    };
    let researcher = Researcher::new(llm, settings);

    researcher.review("deadlift", Category::Strength).await.unwrap();

    assert!(researcher.system_instruction().contains("ALWAYS respond in English."));
    let requests = requests.lock().unwrap();
    assert!(!requests[0].web_search);
    assert!(requests[0].prompt.contains("professional report in English"));
}

//! Default values for StrengthScience configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// LLM Defaults
// ============================================================================

/// Default LLM provider.
pub const DEFAULT_LLM_PROVIDER: &str = "gemini";
/// Provider names accepted in `llm.provider`.
pub const SUPPORTED_PROVIDERS: [&str; 5] = ["gemini", "google", "openai", "openai-compatible", "ollama"];

/// Default max tokens for LLM responses.
pub const DEFAULT_MAX_TOKENS: u32 = 8192;

// Gemini defaults
/// Default Gemini API URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

// OpenAI defaults
/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

// Ollama defaults
/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/v1";
/// Default Ollama model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

// ============================================================================
// Research Defaults
// ============================================================================

/// Language every answer must be written in.
pub const DEFAULT_LANGUAGE: &str = "Traditional Chinese (Taiwan/zh-TW)";

/// Sampling temperature for literature reviews.
pub const DEFAULT_REVIEW_TEMPERATURE: f32 = 0.3;

/// Summary used when the model returns no text for a review.
pub const EMPTY_REVIEW_FALLBACK: &str = "無法生成內容，請稍後再試。";

/// Notification shown when a review request fails.
pub const REVIEW_FAILURE_MESSAGE: &str = "搜尋時發生錯誤，請稍後再試。";

/// Model message appended to the conversation when a chat turn fails.
pub const CHAT_FAILURE_MESSAGE: &str = "抱歉，連線發生錯誤，請稍後再試。";

/// Title shown for a source whose grounding chunk carries none.
pub const DEFAULT_SOURCE_TITLE: &str = "Source";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "strength-science";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "strength.toml";

/// Default log file name.
pub const DEFAULT_LOG_FILE_NAME: &str = "strength.log";

// ============================================================================
// System Prompts
// ============================================================================

/// Default system instruction shared by reviews and chat.
///
/// `{language}` is replaced with the configured answer language.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"You are an expert Strength and Conditioning Coach and Sport Scientist (PhD level).
Your audience consists of other professional coaches and athletes in Taiwan.

When asked about a topic, you must:
1. Search for the LATEST peer-reviewed literature (2024-2025 preferred, 2023 acceptable, seminal works allowed).
2. Synthesize the information into a structured report.
3. Be strictly evidence-based. If research is inconclusive, state that clearly.
4. Output formatting: Use Markdown headers (##, ###) and bold text (**) for readability.

IMPORTANT: You must ALWAYS respond in {language}."#;

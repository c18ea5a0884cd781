use crate::config::DEFAULT_SYSTEM_INSTRUCTION;
use crate::research::Category;

/// Builds the system instruction for the given answer language.
pub fn build_system_instruction(template: Option<&str>, language: &str) -> String {
    template
        .unwrap_or(DEFAULT_SYSTEM_INSTRUCTION)
        .replace("{language}", language)
}

/// Builds the user prompt for a literature review.
pub fn build_review_prompt(topic: &str, category: Category, language: &str) -> String {
    let category = category.label();
    format!(
        r#"Please conduct a comprehensive literature review on: "{topic}" specifically relating to the category of {category}.

Guidelines:
1. Search for the absolute latest peer-reviewed studies (Focus on 2023-2025).
2. Synthesize findings into a professional report in {language}.
3. Be critical: Discuss sample sizes, populations (elite vs untrained), and methodology.

Structure the response in Markdown ({language}):
## 文獻綜述摘要 (Executive Summary)
- Provide a concise 2-3 sentence summary.

## 關鍵研究發現 (Key Research Findings)
- List 3-5 specific findings from recent studies.
- Cite the papers contextually if possible.

## 實務應用建議 (Practical Applications)
- How should a coach apply this in the gym tomorrow?
- Be specific (sets, reps, rest, selection).

## 研究限制與未知 (Limitations)
- What do we still not know?"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_embeds_topic_and_category() {
        let prompt = build_review_prompt("VBT 訓練效果", Category::Power, "English");
        assert!(prompt.contains("\"VBT 訓練效果\""));
        assert!(prompt.contains("category of 爆發力"));
        assert!(prompt.contains("report in English"));
        assert!(prompt.contains("## 實務應用建議 (Practical Applications)"));
    }

    #[test]
    fn test_system_instruction_language() {
        let system = build_system_instruction(None, "Traditional Chinese (Taiwan/zh-TW)");
        assert!(system.contains("ALWAYS respond in Traditional Chinese (Taiwan/zh-TW)."));
        assert!(!system.contains("{language}"));

        let custom = build_system_instruction(Some("Answer in {language} only."), "English");
        assert_eq!(custom, "Answer in English only.");
    }
}

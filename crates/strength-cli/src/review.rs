//! One-shot `strength review` command.

use std::time::Duration;

use color_eyre::eyre::eyre;
use indicatif::{ProgressBar, ProgressStyle};
use strength_core::config::REVIEW_FAILURE_MESSAGE;
use strength_core::markdown::render;
use strength_core::{Block, Category, Inline, Report, ReviewService, SourceLink};

/// Run a single review and print it to stdout.
pub async fn run(
    service: &dyn ReviewService,
    topic: &str,
    category: Category,
    json: bool,
) -> color_eyre::Result<()> {
    if topic.trim().is_empty() {
        return Err(eyre!("topic must not be empty"));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("正在搜尋最新文獻並整理報告中... ({})", category.label()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = service.review(topic, category).await;
    spinner.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", REVIEW_FAILURE_MESSAGE);
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }

    Ok(())
}

/// Plain-text rendition of a report: header, summary, numbered sources.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.topic));
    out.push_str(&format!(
        "[{}] Research Report, generated {}\n\n",
        report.category.label(),
        report.display_date()
    ));
    out.push_str(&format_blocks(&render(&report.summary)));
    out.push_str(&format_sources(&report.sources()));

    out
}

/// Inline runs as plain text, bold runs kept inside `**` markers.
fn marked(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => text.clone(),
            Inline::Bold(text) => format!("**{}**", text),
        })
        .collect()
}

fn format_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading { level: 2, content } => {
                out.push_str(&format!("\n■ {}\n\n", marked(content)));
            }
            Block::Heading { content, .. } => {
                out.push_str(&format!("\n▸ {}\n\n", marked(content)));
            }
            Block::Paragraph(runs) => {
                out.push_str(&marked(runs));
                out.push_str("\n\n");
            }
            Block::List(items) => {
                for item in items {
                    out.push_str(&format!("  • {}\n", marked(item)));
                }
                out.push('\n');
            }
        }
    }

    out
}

fn format_sources(sources: &[SourceLink]) -> String {
    if sources.is_empty() {
        return String::new();
    }

    let mut out = String::from("參考文獻與來源 Reference Sources\n");
    for (i, source) in sources.iter().enumerate() {
        out.push_str(&format!("  [{}] {}\n      {}\n", i + 1, source.title, source.uri));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strength_core::{GroundingChunk, GroundingMetadata};

    #[test]
    fn test_format_report() {
        let grounding = GroundingMetadata::new(vec![
            GroundingChunk::web("https://a.org", Some("A")),
            GroundingChunk::web("https://a.org", Some("A again")),
            GroundingChunk::default(),
        ]);
        let report = Report::new(
            "Sprint speed",
            Category::Power,
            "## Summary\n- **Sled** pushes\n- plyometrics\nClosing note.",
            Some(grounding),
        );

        let text = format_report(&report);

        assert!(text.starts_with("Sprint speed\n[爆發力] Research Report"));
        assert!(text.contains("■ Summary\n"));
        assert!(text.contains("  • **Sled** pushes\n  • plyometrics\n"));
        assert!(text.contains("Closing note.\n"));
        assert!(text.contains("[1] A\n      https://a.org\n"));
        assert!(!text.contains("[2]"));
    }

    #[test]
    fn test_bold_markers_survive() {
        let text = format_blocks(&render("## **Key** findings\nUse **3-5 reps** at **85%**."));
        assert!(text.contains("■ **Key** findings"));
        assert!(text.contains("Use **3-5 reps** at **85%**.\n"));
    }

    #[test]
    fn test_no_sources_section_when_ungrounded() {
        let report = Report::new("t", Category::Strength, "body", None);
        assert!(!format_report(&report).contains("Reference Sources"));
    }
}

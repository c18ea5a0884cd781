//! Research tab body: suggestions, loading state, or the current report.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use strength_core::markdown::render as render_markdown;
use strength_core::session::SUGGESTIONS;
use strength_core::Report;

use super::{markdown, scroll, sources};
use crate::tui::app::App;

const LOADING_TEXT: &str = "正在搜尋最新文獻並整理報告中...";
const LOADING_HINT: &str = "這可能需要 10-15 秒";

/// Render the research tab body.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let research = &app.session.research;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if research.busy {
        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} ", app.spinner()), Style::default().fg(Color::Green)),
                Span::styled(LOADING_TEXT, Style::default().fg(Color::White)),
            ]),
            Line::styled(LOADING_HINT, Style::default().fg(Color::DarkGray)),
        ];
        let loading = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block.title(" Searching "));
        app.max_scroll.set(0);
        frame.render_widget(loading, area);
        return;
    }

    let (title, lines) = match &research.report {
        Some(report) => (" Research Report ", report_lines(report)),
        None => (" Suggested Topics [1-3] ", suggestion_lines()),
    };

    let inner_area = block.inner(area);
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    let max_scroll = scroll::overflow(&body, inner_area);
    app.max_scroll.set(max_scroll);

    let body = body
        .block(block.title(title))
        .scroll((app.scroll_offset.min(max_scroll), 0));

    frame.render_widget(body, area);
}

/// Header, rendered summary and numbered sources.
pub fn report_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", report.category.label()),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            Span::styled(
                format!("  Research Report · Generated {}", report.display_date()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::styled(
            report.topic.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    lines.extend(markdown::lines(&render_markdown(&report.summary)));

    let source_lines = sources::lines(&report.sources(), true);
    if !source_lines.is_empty() {
        lines.push(Line::default());
        lines.extend(source_lines);
    }

    lines
}

fn suggestion_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" [{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::styled(
                suggestion.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!("     {}", suggestion.description),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use strength_core::{Category, GroundingChunk, GroundingMetadata};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_report_lines_include_header_and_sources() {
        let grounding = GroundingMetadata::new(vec![
            GroundingChunk::web("https://x.org", None),
            GroundingChunk::web("https://x.org", Some("dup")),
        ]);
        let report = Report::new("Recovery", Category::Recovery, "Body", Some(grounding));

        let rendered: Vec<String> = report_lines(&report).iter().map(text).collect();

        assert!(rendered[0].contains("Research Report · Generated"));
        assert_eq!(rendered[1], "Recovery");
        assert!(rendered.contains(&"Body".to_string()));
        assert!(rendered.contains(&sources::HEADER.to_string()));
        assert!(rendered.contains(&"  [1] Source".to_string()));
        assert!(!rendered.iter().any(|l| l.contains("[2]")));
    }

    #[test]
    fn test_suggestions_are_numbered() {
        let rendered: Vec<String> = suggestion_lines().iter().map(text).collect();
        assert!(rendered.iter().any(|l| l.starts_with(" [1] ")));
        assert!(rendered.iter().any(|l| l.starts_with(" [3] ")));
    }
}

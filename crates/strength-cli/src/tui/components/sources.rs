//! Numbered source list shared by the report and chat views.

use ratatui::prelude::*;
use strength_core::SourceLink;

pub const HEADER: &str = "參考文獻與來源 Reference Sources";

/// Lines for a source list. Empty when there are no sources.
pub fn lines(sources: &[SourceLink], with_header: bool) -> Vec<Line<'static>> {
    if sources.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    if with_header {
        out.push(Line::styled(
            HEADER,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    for (i, source) in sources.iter().enumerate() {
        out.push(Line::from(vec![
            Span::styled(format!("  [{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::styled(source.title.clone(), Style::default().fg(Color::White)),
        ]));
        out.push(Line::styled(
            format!("      {}", source.uri),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED),
        ));
    }

    out
}

//! Turns rendered markdown blocks into styled terminal lines.

use ratatui::prelude::*;
use strength_core::{Block, Inline};

const BULLET: &str = "  • ";

fn spans(runs: &[Inline], base: Style) -> Vec<Span<'static>> {
    runs.iter()
        .map(|run| {
            let style = match run {
                Inline::Text(_) => base,
                Inline::Bold(_) => base.fg(Color::White).add_modifier(Modifier::BOLD),
            };
            Span::styled(run.as_str().to_string(), style)
        })
        .collect()
}

/// Convert blocks to lines, separating blocks with a blank line.
pub fn lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }

        match block {
            Block::Heading { level: 2, content } => {
                let style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
                out.push(Line::from(spans(content, style)));
            }
            Block::Heading { content, .. } => {
                let style = Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD);
                out.push(Line::from(spans(content, style)));
            }
            Block::Paragraph(runs) => {
                out.push(Line::from(spans(runs, Style::default().fg(Color::Gray))));
            }
            Block::List(items) => {
                for item in items {
                    let mut line = vec![Span::styled(BULLET, Style::default().fg(Color::Green))];
                    line.extend(spans(item, Style::default().fg(Color::Gray)));
                    out.push(Line::from(line));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strength_core::markdown::render;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let out = lines(&render("## Title\nBody"));
        assert_eq!(out.len(), 3);
        assert_eq!(text(&out[0]), "Title");
        assert_eq!(text(&out[1]), "");
        assert_eq!(text(&out[2]), "Body");
    }

    #[test]
    fn test_list_items_get_bullets() {
        let out = lines(&render("- one\n- **two**"));
        assert_eq!(out.len(), 2);
        assert_eq!(text(&out[0]), "  • one");
        assert_eq!(text(&out[1]), "  • two");
        assert!(out[1].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_heading_levels_styled_differently() {
        let out = lines(&render("## Big\n### Small"));
        assert_eq!(out[0].spans[0].style.fg, Some(Color::Green));
        assert_eq!(out[2].spans[0].style.fg, Some(Color::LightGreen));
    }
}

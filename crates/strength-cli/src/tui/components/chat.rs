//! Coaching chat transcript.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use strength_core::markdown::render as render_markdown;
use strength_core::{ChatMessage, Role};

use super::{markdown, scroll, sources};
use crate::tui::app::App;

const EMPTY_TITLE: &str = "AI 肌力與體能教練";
const EMPTY_HINT: &str = "您可以詢問關於訓練週期、動作品質或文獻解讀的問題";
const DISCLAIMER: &str = "AI 回答僅供參考，請結合專業教練判斷。";

/// Render the chat transcript.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chat = &app.session.chat;

    let block = Block::default()
        .title(" Chat ")
        .title_bottom(Line::styled(DISCLAIMER, Style::default().fg(Color::DarkGray)).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);

    if chat.conversation.is_empty() && !chat.busy {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::styled(
                EMPTY_TITLE,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Line::styled(EMPTY_HINT, Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        app.max_scroll.set(0);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for message in chat.conversation.messages() {
        lines.extend(message_lines(message));
        lines.push(Line::default());
    }

    if chat.busy {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", Role::Model.as_str()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(app.spinner(), Style::default().fg(Color::Green)),
        ]));
    }

    let (transcript, max_scroll) = transcript(lines, inner_area, app.scroll_offset);
    app.max_scroll.set(max_scroll);

    frame.render_widget(transcript.block(block), area);
}

/// Wrapped transcript scrolled so the last row is visible, `offset` rows up
/// from the bottom. Also returns the largest useful offset.
fn transcript(lines: Vec<Line<'static>>, inner_area: Rect, offset: u16) -> (Paragraph<'static>, u16) {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let max_scroll = scroll::overflow(&paragraph, inner_area);
    let top = max_scroll.saturating_sub(offset);
    (paragraph.scroll((top, 0)), max_scroll)
}

/// Lines for one message: role label, body, and sources for model replies.
pub fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let label_style = match message.role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Model => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };

    let mut lines = vec![Line::styled(format!("[{}]", message.role.as_str()), label_style)];

    match message.role {
        Role::User => {
            lines.extend(
                message
                    .content
                    .lines()
                    .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::White))),
            );
        }
        Role::Model => {
            lines.extend(markdown::lines(&render_markdown(&message.content)));
            let source_lines = sources::lines(&message.sources(), false);
            if !source_lines.is_empty() {
                lines.push(Line::default());
                lines.extend(source_lines);
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use strength_core::{GroundingChunk, GroundingMetadata};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_user_message_is_plain() {
        let lines = message_lines(&ChatMessage::user("**not bold**"));
        assert_eq!(text(&lines[0]), "[You]");
        assert_eq!(text(&lines[1]), "**not bold**");
    }

    #[test]
    fn test_model_message_lists_sources() {
        let message = ChatMessage::model("## Answer\nUse **RPE**.").with_grounding(Some(
            GroundingMetadata::new(vec![GroundingChunk::web("https://pubmed.gov/1", Some("Study"))]),
        ));

        let rendered: Vec<String> = message_lines(&message).iter().map(text).collect();

        assert_eq!(rendered[0], "[Coach]");
        assert!(rendered.contains(&"Use RPE.".to_string()));
        assert!(rendered.contains(&"  [1] Study".to_string()));
        assert!(!rendered.contains(&sources::HEADER.to_string()));
    }

    fn rendered_rows(paragraph: Paragraph<'static>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(paragraph, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_transcript_keeps_last_line_visible() {
        let lines = vec![Line::from("一二三四五六七八九十"), Line::from("LAST")];
        let (paragraph, max_scroll) = transcript(lines, Rect::new(0, 0, 5, 2), 0);

        assert_eq!(max_scroll, 4);
        let rows = rendered_rows(paragraph, 5, 2);
        assert_eq!(rows[1].trim_end(), "LAST");
    }

    #[test]
    fn test_transcript_word_wrap_keeps_last_line_visible() {
        let lines = vec![Line::from("aaa bbb ccc"), Line::from("END")];
        let (paragraph, _) = transcript(lines, Rect::new(0, 0, 4, 2), 0);

        let rows = rendered_rows(paragraph, 4, 2);
        assert_eq!(rows[1].trim_end(), "END");
    }

    #[test]
    fn test_transcript_scrolled_up() {
        let lines = vec![Line::from("one"), Line::from("two"), Line::from("three")];
        let (paragraph, max_scroll) = transcript(lines, Rect::new(0, 0, 10, 1), 2);

        assert_eq!(max_scroll, 2);
        assert_eq!(rendered_rows(paragraph, 10, 1)[0].trim_end(), "one");
    }
}

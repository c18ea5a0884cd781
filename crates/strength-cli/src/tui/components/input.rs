//! Input field component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strength_core::Tab;

use crate::tui::app::{App, InputMode};

/// Render the input field for the active tab.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let busy = match app.session.tab {
        Tab::Research => app.session.research.busy,
        Tab::Chat => app.session.chat.busy,
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match app.session.tab {
        Tab::Research => " Topic ",
        Tab::Chat => " Ask the coach ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_area = block.inner(area);
    let buffer = app.active_input();

    let input_text = if editing {
        format!("{}_", buffer)
    } else if buffer.is_empty() {
        "Press 'i' to type...".to_string()
    } else {
        buffer.to_string()
    };

    let text_style = if editing && !busy {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(input_text).style(text_style).block(block);
    frame.render_widget(input, area);

    if editing {
        let cursor_x = inner_area.x + Line::from(buffer).width() as u16;
        frame.set_cursor_position(Position::new(cursor_x, inner_area.y));
    }
}

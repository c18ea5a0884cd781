//! UI rendering for the TUI.

use ratatui::{prelude::*, widgets::Paragraph};
use strength_core::Tab;

use super::app::{App, InputMode};
use super::components::{categories, chat, input, notification, report, tabs};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: tabs, content, input, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Tab bar
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    tabs::render(app, frame, chunks[0]);

    match app.session.tab {
        Tab::Research => render_research(app, frame, chunks[1]),
        Tab::Chat => chat::render(app, frame, chunks[1]),
    }

    input::render(app, frame, chunks[2]);
    render_status_bar(app, frame, chunks[3]);

    if let Some(note) = &app.session.notification {
        notification::render(note, frame, area);
    }
}

/// Category selector above the report body.
fn render_research(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    categories::render(app, frame, chunks[0]);
    report::render(app, frame, chunks[1]);
}

/// Render the status bar.
fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let mode_str = match app.input_mode {
        InputMode::Normal => "[i] Edit  [Tab] Switch  [j/k] Scroll  [o] Open source  [q] Quit",
        InputMode::Editing => "[Enter] Send  [Esc] Cancel",
        InputMode::OpenSource => "[1-9] Open  [any] Cancel",
    };

    let status = match &app.status_message {
        Some(message) => format!("{}  |  {}", mode_str, message),
        None => mode_str.to_string(),
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}

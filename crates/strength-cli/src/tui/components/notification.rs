//! Blocking error popup.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use strength_core::session::Notification;

/// Render the popup centered over `area`.
pub fn render(notification: &Notification, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 50, 7);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::styled(notification.message.clone(), Style::default().fg(Color::White)),
        Line::default(),
        Line::styled("[Enter] OK", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

//! Tab bar component.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs as RataTabs},
};
use strength_core::Tab;

use crate::tui::app::App;

/// Render the tab bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let titles = vec![Tab::Research.title(), Tab::Chat.title()];

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .title(" StrengthScience ")
                .title(Line::from(format!(" {} ", app.model_name)).right_aligned())
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.session.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}

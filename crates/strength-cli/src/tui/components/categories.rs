//! Category selector row for the research tab.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strength_core::Category;

use crate::tui::app::App;

/// Render the category selector.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();

    let selector = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Category [h/l] ")
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.session.research.category.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");

    frame.render_widget(selector, area);
}

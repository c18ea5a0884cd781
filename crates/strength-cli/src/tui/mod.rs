//! TUI for StrengthScience.
//!
//! Provides an interactive terminal UI with:
//! - Tabs for the literature library and the coaching chat
//! - Topic input and category selector
//! - Rendered reports and chat transcript with numbered sources
//! - Loading and error states

mod app;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;
use crate::DynResearcher;

/// Run the TUI application.
pub async fn run(researcher: Arc<DynResearcher>) -> color_eyre::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model_name = researcher.model_name();
    let mut app = App::new(researcher.clone(), researcher, model_name);

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

//! Application state and main event loop.

use std::cell::Cell;
use std::io::Stdout;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{info, warn};

use strength_core::session::SUGGESTIONS;
use strength_core::{ChatService, ReviewService, Session, SourceLink, Tab};

use super::event::{Event, EventHandler};
use super::ui;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    /// `o` was pressed; the next digit opens that source.
    OpenSource,
}

/// Main application state.
pub struct App {
    /// Tabs, inputs, report and conversation
    pub session: Session,
    /// Current input mode
    pub input_mode: InputMode,
    /// Scroll offset for the main content (lines)
    pub scroll_offset: u16,
    /// Largest useful scroll offset, updated on every draw
    pub max_scroll: Cell<u16>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Model label for the status bar
    pub model_name: String,
    spinner_frame: usize,
    review_service: Arc<dyn ReviewService>,
    chat_service: Arc<dyn ChatService>,
}

impl App {
    /// Create a new app instance.
    pub fn new(
        review_service: Arc<dyn ReviewService>,
        chat_service: Arc<dyn ChatService>,
        model_name: String,
    ) -> Self {
        Self {
            session: Session::new(),
            input_mode: InputMode::Normal,
            scroll_offset: 0,
            max_scroll: Cell::new(0),
            should_quit: false,
            status_message: None,
            model_name,
            spinner_frame: 0,
            review_service,
            chat_service,
        }
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> color_eyre::Result<()> {
        let mut events = EventHandler::new();

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key, events.sender()),
                    Event::Tick => {
                        if self.session.research.busy || self.session.chat.busy {
                            self.spinner_frame = self.spinner_frame.wrapping_add(1);
                        }
                    }
                    Event::ReviewFinished(result) => {
                        self.session.complete_review(result);
                        self.scroll_offset = 0;
                    }
                    Event::ChatFinished(result) => {
                        self.session.complete_chat(result);
                        self.scroll_offset = 0;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Current spinner glyph.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// The input buffer belonging to the active tab.
    pub fn active_input(&self) -> &str {
        match self.session.tab {
            Tab::Research => &self.session.research.topic,
            Tab::Chat => &self.session.chat.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.session.tab {
            Tab::Research => &mut self.session.research.topic,
            Tab::Chat => &mut self.session.chat.input,
        }
    }

    /// Sources the `o` key can open on the active tab.
    pub fn visible_sources(&self) -> Vec<SourceLink> {
        match self.session.tab {
            Tab::Research => self
                .session
                .research
                .report
                .as_ref()
                .map(|r| r.sources())
                .unwrap_or_default(),
            Tab::Chat => self
                .session
                .chat
                .conversation
                .last_model_message()
                .map(|m| m.sources())
                .unwrap_or_default(),
        }
    }

    /// Handle a key event.
    fn handle_key_event(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The error popup blocks everything else until dismissed.
        if self.session.notification.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.session.dismiss_notification();
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Editing => self.handle_editing_mode_key(key, event_tx),
            InputMode::OpenSource => self.handle_open_source_key(key),
        }
    }

    /// Handle key in normal mode.
    fn handle_normal_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.session.next_tab();
                self.scroll_offset = 0;
                self.status_message = None;
            }
            KeyCode::Char('i') | KeyCode::Enter => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            KeyCode::Char('o') => {
                let count = self.visible_sources().len();
                if count == 0 {
                    self.status_message = Some("No sources to open".to_string());
                } else {
                    self.input_mode = InputMode::OpenSource;
                    self.status_message = Some(format!("Open source [1-{}]", count.min(9)));
                }
            }
            KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left
                if self.session.tab == Tab::Research =>
            {
                self.session.previous_category();
            }
            KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right
                if self.session.tab == Tab::Research =>
            {
                self.session.next_category();
            }
            KeyCode::Char(c @ '1'..='9')
                if self.session.tab == Tab::Research && self.session.shows_suggestions() =>
            {
                let index = c as usize - '1' as usize;
                if self.session.use_suggestion(index) {
                    self.status_message = Some(format!("Topic: {}", SUGGESTIONS[index].title));
                }
            }
            _ => {}
        }
    }

    /// Handle key in editing mode.
    fn handle_editing_mode_key(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.submit_input(event_tx);
            }
            KeyCode::Char(c) => {
                self.active_input_mut().push(c);
            }
            KeyCode::Backspace => {
                self.active_input_mut().pop();
            }
            _ => {}
        }
    }

    /// Handle the digit after `o`.
    fn handle_open_source_key(&mut self, key: KeyEvent) {
        self.input_mode = InputMode::Normal;

        let KeyCode::Char(c @ '1'..='9') = key.code else {
            self.status_message = None;
            return;
        };

        let index = c as usize - '1' as usize;
        let Some(source) = self.visible_sources().into_iter().nth(index) else {
            self.status_message = Some(format!("No source [{}]", c));
            return;
        };

        match open::that(&source.uri) {
            Ok(()) => {
                info!(uri = %source.uri, "opened source");
                self.status_message = Some(format!("Opened {}", source.title));
            }
            Err(e) => {
                warn!(uri = %source.uri, error = %e, "failed to open source");
                self.status_message = Some(format!("Could not open {}: {}", source.uri, e));
            }
        }
    }

    /// Submit the active tab's input.
    fn submit_input(&mut self, event_tx: mpsc::UnboundedSender<Event>) {
        match self.session.tab {
            Tab::Research => {
                if let Some(request) = self.session.submit_review() {
                    self.status_message = None;
                    self.scroll_offset = 0;
                    let service = self.review_service.clone();
                    tokio::spawn(async move {
                        let result = service.review(&request.topic, request.category).await;
                        let _ = event_tx.send(Event::ReviewFinished(result));
                    });
                }
            }
            Tab::Chat => {
                if let Some(request) = self.session.submit_chat() {
                    self.scroll_offset = 0;
                    let service = self.chat_service.clone();
                    tokio::spawn(async move {
                        let result = service.reply(&request.history, &request.message).await;
                        let _ = event_tx.send(Event::ChatFinished(result));
                    });
                }
            }
        }

        self.input_mode = InputMode::Normal;
    }

    /// Scroll content up.
    fn scroll_up(&mut self) {
        match self.session.tab {
            // Research scrolls from the top, chat from the bottom.
            Tab::Research => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Tab::Chat => self.scroll_offset = self.clamped(self.scroll_offset.saturating_add(1)),
        }
    }

    /// Scroll content down.
    fn scroll_down(&mut self) {
        match self.session.tab {
            Tab::Research => self.scroll_offset = self.clamped(self.scroll_offset.saturating_add(1)),
            Tab::Chat => self.scroll_offset = self.scroll_offset.saturating_sub(1),
        }
    }

    fn clamped(&self, offset: u16) -> u16 {
        offset.min(self.max_scroll.get())
    }
}

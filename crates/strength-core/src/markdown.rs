//! Lightweight line-based Markdown renderer.
//!
//! Understands exactly what the system instruction asks the model to emit:
//! `##`/`###` headings, `-`/`*` bullet lists, and `**bold**` spans. Anything
//! else passes through as paragraph text.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// An inline run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Bold(String),
}

impl Inline {
    /// The run's text without any emphasis markers.
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) => s,
        }
    }
}

/// A structural node produced by [`render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A `##` (level 2) or `###` (level 3) heading.
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    /// Consecutive bullet items, one entry per item.
    List(Vec<Vec<Inline>>),
}

enum State {
    Idle,
    AccumulatingList(Vec<Vec<Inline>>),
}

struct Renderer {
    blocks: Vec<Block>,
    state: State,
}

impl Renderer {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            state: State::Idle,
        }
    }

    fn flush(&mut self) {
        if let State::AccumulatingList(items) = std::mem::replace(&mut self.state, State::Idle) {
            self.blocks.push(Block::List(items));
        }
    }

    fn push_item(&mut self, item: Vec<Inline>) {
        match &mut self.state {
            State::AccumulatingList(items) => items.push(item),
            State::Idle => self.state = State::AccumulatingList(vec![item]),
        }
    }

    fn line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix("## ") {
            self.flush();
            self.blocks.push(Block::Heading { level: 2, content: parse_inline(rest) });
            return;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            self.flush();
            self.blocks.push(Block::Heading { level: 3, content: parse_inline(rest) });
            return;
        }

        let trimmed = line.trim();

        if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
            // Marker is a single ASCII byte.
            let item = trimmed[1..].trim_start();
            self.push_item(parse_inline(item));
            return;
        }

        // Blank lines neither emit nor flush, so a list survives them.
        if !trimmed.is_empty() {
            self.flush();
            self.blocks.push(Block::Paragraph(parse_inline(line)));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Renders a block of Markdown-like text into structural blocks.
///
/// Single forward pass; output order equals input line order. Bullet items
/// are buffered and emitted as one [`Block::List`] when a heading or
/// paragraph line arrives or the input ends. Empty input yields no blocks.
pub fn render(text: &str) -> Vec<Block> {
    let mut renderer = Renderer::new();
    for line in text.lines() {
        renderer.line(line);
    }
    renderer.finish()
}

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"))
}

/// Resolves `**bold**` spans in a single line of text.
///
/// Matching is non-greedy and does not nest; an unpaired `**` stays literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in bold_pattern().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            runs.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        runs.push(Inline::Bold(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < text.len() {
        runs.push(Inline::Text(text[last..].to_string()));
    }

    runs
}

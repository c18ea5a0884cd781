//! Row accounting for word-wrapped paragraphs.

use ratatui::{prelude::*, widgets::Paragraph};

/// Rows of `paragraph` that do not fit in `area` once wrapped to its width.
///
/// `paragraph` must not carry a block yet; `area` is the inner area it will
/// be drawn into.
pub fn overflow(paragraph: &Paragraph, area: Rect) -> u16 {
    let rows = paragraph.line_count(area.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(area.height)
}

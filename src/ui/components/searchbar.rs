//! Search Bar Component
//!
//! Text input bound to the search text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

const PLACEHOLDER: &str = "Qual senha você procura?";

/// Search bar widget
pub struct SearchBar<'a> {
    value: &'a str,
    cursor: Option<usize>,
}

impl<'a> SearchBar<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value, cursor: None }
    }

    /// Show the editing cursor at the given buffer position.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.cursor.is_some() { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        render_value(buf, &inner, self.value);
        render_cursor(buf, &inner, self.value, self.cursor);
    }
}

fn render_value(buf: &mut Buffer, inner: &Rect, value: &str) {
    if value.is_empty() {
        buf.set_string(inner.x, inner.y, PLACEHOLDER, Style::default().fg(Color::DarkGray));
    } else {
        buf.set_string(inner.x, inner.y, value, Style::default().fg(Color::White));
    }
}

fn render_cursor(buf: &mut Buffer, inner: &Rect, value: &str, cursor: Option<usize>) {
    let Some(cursor) = cursor else { return };

    // The cursor is a byte offset; screen columns count characters.
    let cursor_cols = value
        .char_indices()
        .take_while(|(i, _)| *i < cursor)
        .count() as u16;
    let cursor_x = inner.x + cursor_cols;
    if cursor_x >= inner.x + inner.width {
        return;
    }
    if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}

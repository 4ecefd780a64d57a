//! Metadata Component
//!
//! Screen title and login count summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const TITLE: &str = "Suas senhas";
const EMPTY_LABEL: &str = "Nada a ser exibido";

/// Count label shown next to the screen title.
///
/// Non-zero counts are zero-padded to at least two digits.
pub fn total_label(count: usize) -> String {
    if count == 0 {
        EMPTY_LABEL.to_string()
    } else {
        format!("{:02} ao total", count)
    }
}

/// Metadata line widget
pub struct Metadata {
    count: usize,
}

impl Metadata {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Widget for Metadata {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        buf.set_string(area.x, area.y, TITLE, title_style);

        let label = total_label(self.count);
        let label_x = area.x + area.width.saturating_sub(label.chars().count() as u16);
        buf.set_string(label_x, area.y, &label, Style::default().fg(Color::DarkGray));
    }
}

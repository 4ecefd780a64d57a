//! Status Line Component
//!
//! Displays mode indicator, search buffer, and list position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    search_buffer: Option<&'a str>,
    store_name: Option<&'a str>,
    item_count: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            search_buffer: None,
            store_name: None,
            item_count: None,
        }
    }

    pub fn search_buffer(mut self, buffer: &'a str) -> Self {
        self.search_buffer = Some(buffer);
        self
    }

    pub fn store_name(mut self, name: &'a str) -> Self {
        self.store_name = Some(name);
        self
    }

    pub fn item_count(mut self, selected: usize, total: usize) -> Self {
        self.item_count = Some((selected, total));
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = match self.mode {
            InputMode::Normal => Style::default().fg(Color::Black).bg(Color::Blue),
            InputMode::Search => Style::default().fg(Color::Black).bg(Color::Magenta),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16;

        buf.set_string(x, area.y, " ", Style::default().bg(Color::DarkGray));
        x += 1;

        if let Some(buffer) = self.search_buffer {
            let text = format!("/{}", buffer);
            buf.set_string(x, area.y, &text, Style::default().fg(Color::White).bg(Color::DarkGray));
        }

        let mut right_parts: Vec<String> = Vec::new();
        if let Some((selected, total)) = self.item_count {
            right_parts.push(format!("{}/{}", selected + 1, total));
        }
        if let Some(name) = self.store_name {
            right_parts.push(name.to_string());
        }

        let right_text = right_parts.join(" ");
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("j/k", "navigate"),
                ("/", "search"),
                ("C-r", "reload"),
                ("q", "quit"),
            ],
            InputMode::Search => vec![
                ("Esc", "cancel"),
                ("Enter", "search"),
                ("C-u", "clear"),
            ],
        };
        Self { hints }
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

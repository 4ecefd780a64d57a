//! Header Component
//!
//! Fixed user identity banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Identity shown in the header. Static, never derived from loaded data.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub name: String,
    pub avatar_url: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            name: "Rocketseat".to_string(),
            avatar_url: "https://i.ibb.co/ZmFHZDM/rocketseat.jpg".to_string(),
        }
    }
}

/// Header widget
pub struct Header<'a> {
    user: &'a UserIdentity,
}

impl<'a> Header<'a> {
    pub fn new(user: &'a UserIdentity) -> Self {
        Self { user }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::Indexed(236)));

        let greeting = format!("Olá, {}", self.user.name);
        let greeting_style = Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(236))
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, &greeting, greeting_style);

        let avatar_width = self.user.avatar_url.chars().count() as u16;
        let avatar_x = area.x + area.width.saturating_sub(avatar_width + 1);
        let avatar_style = Style::default().fg(Color::DarkGray).bg(Color::Indexed(236));
        buf.set_string(avatar_x, area.y, &self.user.avatar_url, avatar_style);
    }
}

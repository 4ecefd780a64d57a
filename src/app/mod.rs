//! Application State
//!
//! Core screen logic tying together store, logins, and UI.

mod config;
mod input;
mod logins;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::input::modes::{InputMode, ModeState};
use crate::logins::LoginRecord;
use crate::store::KeyValueStore;
use crate::ui::components::{ListViewState, LoginRow, UserIdentity};
use crate::ui::renderer::{Renderer, UiState};

pub use config::AppConfig;

pub struct App {
    pub config: AppConfig,
    pub store: Box<dyn KeyValueStore>,
    pub mode_state: ModeState,
    pub terminal_size: Rect,
    pub list_state: ListViewState,
    /// Full set of logins loaded from the store
    pub logins: Vec<LoginRecord>,
    /// Subset currently displayed
    pub visible: Vec<LoginRecord>,
    pub login_rows: Vec<LoginRow>,
    pub search_text: String,
    pub user: UserIdentity,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            config,
            store,
            mode_state: ModeState::new(),
            terminal_size: Rect::default(),
            list_state: ListViewState::new(),
            logins: Vec::new(),
            visible: Vec::new(),
            login_rows: Vec::new(),
            search_text: String::new(),
            user: UserIdentity::default(),
            should_quit: false,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.terminal_size = frame.area();

        let search_cursor =
            (self.mode_state.mode == InputMode::Search).then_some(self.mode_state.cursor);
        let store_name = self.config.display_name();

        let mut state = UiState {
            mode: self.mode_state.mode,
            user: &self.user,
            search_text: &self.search_text,
            search_cursor,
            logins: &self.login_rows,
            list_state: &mut self.list_state,
            store_name: &store_name,
        };

        Renderer::render(frame, &mut state);
    }

    pub fn half_page(&self) -> usize {
        (self.terminal_size.height / 2).max(1) as usize
    }

    pub fn full_page(&self) -> usize {
        self.terminal_size.height.max(1) as usize
    }
}

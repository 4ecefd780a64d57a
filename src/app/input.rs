use crossterm::event::{KeyEvent, KeyEventKind};

use crate::input::keymap::{normal_mode_action, text_input_action, Action};
use crate::input::modes::InputMode;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = self.resolve_action(key);
        self.execute_action(action)
    }

    fn resolve_action(&mut self, key: KeyEvent) -> Action {
        match self.mode_state.mode {
            InputMode::Normal => {
                let (action, pending) = normal_mode_action(key, self.mode_state.pending);
                self.mode_state.pending = pending;
                action
            }
            InputMode::Search => self.handle_text_input(text_input_action(key)),
        }
    }

    // Keystrokes edit the buffer and mirror it into the search text;
    // filtering waits for an explicit submit.
    fn handle_text_input(&mut self, action: Action) -> Action {
        match action {
            Action::InsertChar(c) => {
                self.mode_state.insert_char(c);
                self.sync_search_text();
                Action::None
            }
            Action::DeleteChar => {
                self.mode_state.delete_char();
                self.sync_search_text();
                Action::None
            }
            Action::DeleteCharForward => {
                self.mode_state.delete_char_forward();
                self.sync_search_text();
                Action::None
            }
            Action::CursorLeft => {
                self.mode_state.cursor_left();
                Action::None
            }
            Action::CursorRight => {
                self.mode_state.cursor_right();
                Action::None
            }
            Action::CursorHome => {
                self.mode_state.cursor_home();
                Action::None
            }
            Action::CursorEnd => {
                self.mode_state.cursor_end();
                Action::None
            }
            Action::ClearLine => {
                self.mode_state.clear_buffer();
                self.sync_search_text();
                Action::None
            }
            Action::Submit => self.submit_text_input(),
            Action::Cancel => {
                // The edited text stays in the search bar; the displayed
                // list is left untouched.
                self.mode_state.to_normal();
                Action::None
            }
            _ => action,
        }
    }

    fn sync_search_text(&mut self) {
        self.search_text = self.mode_state.get_buffer().to_string();
    }

    fn submit_text_input(&mut self) -> Action {
        let buffer = self.mode_state.get_buffer().to_string();
        self.mode_state.to_normal();
        Action::Search(buffer)
    }

    fn execute_action(&mut self, action: Action) -> Result<bool, Box<dyn std::error::Error>> {
        match action {
            Action::MoveUp => self.list_state.move_up(),
            Action::MoveDown => self.list_state.move_down(),
            Action::MoveToTop => self.list_state.move_to_top(),
            Action::MoveToBottom => self.list_state.move_to_bottom(),
            Action::HalfPageUp => {
                let page = self.half_page();
                self.list_state.page_up(page);
            }
            Action::HalfPageDown => {
                let page = self.half_page();
                self.list_state.page_down(page);
            }
            Action::PageUp => {
                let page = self.full_page();
                self.list_state.page_up(page);
            }
            Action::PageDown => {
                let page = self.full_page();
                self.list_state.page_down(page);
            }
            Action::EnterSearch => {
                self.mode_state.to_search();
                self.mode_state.set_buffer(&self.search_text);
            }
            Action::Search(query) => {
                self.search_text = query;
                self.submit_search();
            }
            Action::Refresh => self.reload()?,
            Action::Quit => self.should_quit = true,
            _ => {}
        }

        Ok(self.should_quit)
    }
}

//! Input Modes
//!
//! Modal editing state for the login list screen.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Search input mode (/)
    Search,
}

impl InputMode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
        }
    }

    /// Check if mode accepts text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Search)
    }
}

/// Mode state with associated data
#[derive(Debug, Clone)]
pub struct ModeState {
    /// Current mode
    pub mode: InputMode,
    /// Text buffer for input modes
    pub buffer: String,
    /// Cursor byte offset in buffer, always on a char boundary
    pub cursor: usize,
    /// Pending key sequence (for multi-key commands like gg)
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            cursor: 0,
            pending: None,
        }
    }
}

impl ModeState {
    /// Create new mode state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to normal mode, clearing the buffer
    pub fn to_normal(&mut self) {
        self.mode = InputMode::Normal;
        self.buffer.clear();
        self.cursor = 0;
        self.pending = None;
    }

    /// Switch to search mode
    pub fn to_search(&mut self) {
        self.mode = InputMode::Search;
        self.pending = None;
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.buffer, self.cursor);
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = next_char_boundary(&self.buffer, self.cursor);
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear buffer
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Get buffer contents
    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    /// Set buffer contents
    pub fn set_buffer(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.buffer.len();
    }
}

fn prev_char_boundary(s: &str, index: usize) -> usize {
    s[..index].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    s[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::new();
        assert_eq!(state.mode, InputMode::Normal);

        state.to_search();
        assert_eq!(state.mode, InputMode::Search);

        state.to_normal();
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_search_keeps_buffer_on_entry() {
        let mut state = ModeState::new();
        state.set_buffer("gmail");
        state.to_search();
        assert_eq!(state.get_buffer(), "gmail");
    }

    #[test]
    fn test_text_input() {
        let mut state = ModeState::new();
        state.to_search();

        for c in "gmail".chars() {
            state.insert_char(c);
        }

        assert_eq!(state.get_buffer(), "gmail");
        assert_eq!(state.cursor, 5);

        state.delete_char();
        assert_eq!(state.get_buffer(), "gmai");
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = ModeState::new();
        state.set_buffer("gmail");

        state.cursor_home();
        assert_eq!(state.cursor, 0);

        state.cursor_end();
        assert_eq!(state.cursor, 5);

        state.cursor_left();
        assert_eq!(state.cursor, 4);

        state.cursor_right();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = ModeState::new();
        for c in "você".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.get_buffer(), "você");

        state.cursor_left();
        state.cursor_left();
        state.cursor_right();
        state.delete_char();
        assert_eq!(state.get_buffer(), "voê");

        state.delete_char_forward();
        assert_eq!(state.get_buffer(), "vo");
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut state = ModeState::new();
        state.set_buffer("gml");
        state.cursor = 1;

        state.insert_char('m');
        state.insert_char('a');
        assert_eq!(state.get_buffer(), "gmaml");
    }

    #[test]
    fn test_is_text_input() {
        assert!(!InputMode::Normal.is_text_input());
        assert!(InputMode::Search.is_text_input());
    }
}

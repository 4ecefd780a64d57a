//! Renderer
//!
//! Main rendering logic for the login list screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{
    EmptyState, Header, HelpBar, ListViewState, LoginList, LoginRow, Metadata, SearchBar,
    StatusLine, UserIdentity,
};
use crate::input::InputMode;

pub struct UiState<'a> {
    pub mode: InputMode,
    pub user: &'a UserIdentity,
    pub search_text: &'a str,
    pub search_cursor: Option<usize>,
    pub logins: &'a [LoginRow],
    pub list_state: &'a mut ListViewState,
    pub store_name: &'a str,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let chunks = create_main_layout(frame.area());

        render_header(frame, chunks[0], state.user);
        render_search_bar(frame, chunks[1], state);
        render_metadata(frame, chunks[2], state);
        render_list(frame, chunks[3], state);
        render_status_line(frame, chunks[4], state);
        render_help_bar(frame, chunks[5], state.mode);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_header(frame: &mut Frame, area: Rect, user: &UserIdentity) {
    frame.render_widget(Header::new(user), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let search = SearchBar::new(state.search_text).cursor(state.search_cursor);
    frame.render_widget(search, area);
}

fn render_metadata(frame: &mut Frame, area: Rect, state: &UiState) {
    frame.render_widget(Metadata::new(state.logins.len()), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut UiState) {
    if state.logins.is_empty() {
        let empty = EmptyState::new("Nada a ser exibido").hint("Press Ctrl-r to reload");
        frame.render_widget(empty, area);
        return;
    }

    let list = LoginList::new(state.logins);
    frame.render_stateful_widget(list, area, state.list_state);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode).store_name(state.store_name);

    if state.mode.is_text_input() {
        status = status.search_buffer(state.search_text);
    }

    if let Some(selected) = state.list_state.selected() {
        status = status.item_count(selected, state.list_state.total);
    }

    frame.render_widget(status, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, mode: InputMode) {
    let help_bar = HelpBar::for_mode(mode);
    frame.render_widget(help_bar, area);
}

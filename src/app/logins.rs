use crate::logins::{self, LoginRecord};
use crate::ui::components::LoginRow;

use super::App;

impl App {
    /// Reload the login list from the store.
    ///
    /// Assigns the loaded records to both the full and the displayed list,
    /// discarding any active filter. Runs at startup and again on every
    /// focus-gained event; each run replaces the in-memory state wholesale.
    /// Load and parse errors propagate to the event loop.
    pub fn reload(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let loaded = logins::load_logins(self.store.as_ref())?;
        self.visible = loaded.clone();
        self.logins = loaded;
        self.sync_rows();
        Ok(())
    }

    /// Recompute the displayed list from the full list and the search text.
    ///
    /// Runs only on explicit submit, never per keystroke.
    pub fn submit_search(&mut self) {
        self.visible = logins::filter_by_service(&self.logins, &self.search_text);
        self.sync_rows();
    }

    fn sync_rows(&mut self) {
        self.login_rows = self.visible.iter().map(login_to_row).collect();
        self.list_state.set_total(self.login_rows.len());
    }
}

pub fn login_to_row(login: &LoginRecord) -> LoginRow {
    LoginRow {
        id: login.id.clone(),
        service_name: login.service_name.clone(),
        email: login.email.clone(),
        password: login.password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;
    use crate::logins::STORAGE_KEY;
    use crate::store::MemoryStore;

    const FIXTURE: &str = r#"[
        {"id":"1","service_name":"Gmail","email":"a@a.com","password":"p1"},
        {"id":"2","service_name":"GitHub","email":"b@b.com","password":"p2"},
        {"id":"3","service_name":"Spotify","email":"c@c.com","password":"p3"}
    ]"#;

    fn test_app(value: Option<&str>) -> App {
        let mut store = MemoryStore::new();
        if let Some(value) = value {
            store.set(STORAGE_KEY, value);
        }
        App::new(AppConfig::default(), Box::new(store))
    }

    #[test]
    fn test_reload_seeds_both_lists() {
        let mut app = test_app(Some(FIXTURE));
        app.reload().unwrap();

        assert_eq!(app.logins.len(), 3);
        assert_eq!(app.visible, app.logins);
        assert_eq!(app.login_rows.len(), 3);
        assert_eq!(app.login_rows[0].id, "1");
    }

    #[test]
    fn test_reload_empty_store() {
        let mut app = test_app(None);
        app.reload().unwrap();

        assert!(app.logins.is_empty());
        assert!(app.visible.is_empty());
    }

    #[test]
    fn test_reload_malformed_value_is_error() {
        let mut app = test_app(Some("{broken"));
        assert!(app.reload().is_err());
    }

    #[test]
    fn test_submit_filters_from_full_list() {
        let mut app = test_app(Some(FIXTURE));
        app.reload().unwrap();

        app.search_text = "gm".to_string();
        app.submit_search();
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].service_name, "Gmail");

        // A second submit re-derives from the full list, not the previous
        // displayed subset.
        app.search_text = "spo".to_string();
        app.submit_search();
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].service_name, "Spotify");
    }

    #[test]
    fn test_submit_no_match_is_empty() {
        let mut app = test_app(Some(FIXTURE));
        app.reload().unwrap();

        app.search_text = "zz".to_string();
        app.submit_search();
        assert!(app.visible.is_empty());
        assert!(app.login_rows.is_empty());
    }

    #[test]
    fn test_clearing_search_restores_full_list() {
        let mut app = test_app(Some(FIXTURE));
        app.reload().unwrap();

        app.search_text = "gm".to_string();
        app.submit_search();
        assert_eq!(app.visible.len(), 1);

        app.search_text.clear();
        app.submit_search();
        assert_eq!(app.visible, app.logins);
    }

    #[test]
    fn test_reload_discards_active_filter() {
        let mut app = test_app(Some(FIXTURE));
        app.reload().unwrap();

        app.search_text = "gm".to_string();
        app.submit_search();
        assert_eq!(app.visible.len(), 1);

        app.reload().unwrap();
        assert_eq!(app.visible, app.logins);
        assert_eq!(app.search_text, "gm");
    }
}

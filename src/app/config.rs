use std::path::PathBuf;

pub struct AppConfig {
    pub store_path: PathBuf,
}

impl AppConfig {
    /// Store file name shown in the status line.
    pub fn display_name(&self) -> String {
        self.store_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.store_path.display().to_string())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let store_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("savepass")
            .join("storage.json");

        Self { store_path }
    }
}

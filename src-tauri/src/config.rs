//! Application Configuration
//!
//! Resolves where the database and logs live.

use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager};

/// Database file inside the app data dir
pub const DB_FILE_NAME: &str = "todos.db";
/// Log file stem inside the app log dir
pub const LOG_NAME: &str = "TodoApp";
/// Overrides the database path when set and non-empty
pub const DB_PATH_ENV: &str = "TODO_APP_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolve from the app's platform directories and the environment
    pub fn resolve(app_handle: &AppHandle) -> Result<Self, String> {
        let data_dir = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| format!("Failed to resolve app data dir: {}", e))?;
        let log_dir = app_handle
            .path()
            .app_log_dir()
            .map_err(|e| format!("Failed to resolve app log dir: {}", e))?;

        std::fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create {}: {}", data_dir.display(), e))?;

        Ok(Self::from_parts(&data_dir, log_dir, std::env::var(DB_PATH_ENV).ok()))
    }

    fn from_parts(data_dir: &Path, log_dir: PathBuf, db_override: Option<String>) -> Self {
        let db_path = match db_override {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => data_dir.join(DB_FILE_NAME),
        };
        Self { db_path, log_dir }
    }
}

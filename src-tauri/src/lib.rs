//! Todo App Backend
//!
//! Layered architecture:
//! - domain: Todo entity, validation and action errors
//! - repository: Persistence gateway over SQLite
//! - actions: Validated CRUD returning uniform results
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

mod actions;
mod commands;
mod config;
mod domain;
mod repository;

use actions::TodoService;
use config::{AppConfig, LOG_NAME};
use repository::{init_db, SqliteTodoRepository};

/// Application state shared across commands
pub struct AppState {
    pub todos: TodoService,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::resolve(app.handle())?;
            rolling_logger::init_logger(&config.log_dir, LOG_NAME)?;
            log::info!("app setup starting");

            let conn = init_db(&config.db_path)?;
            let repo = SqliteTodoRepository::new(Arc::new(Mutex::new(conn)));

            app.manage(AppState {
                todos: TodoService::new(Arc::new(repo)),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_todos,
            commands::create_todo,
            commands::edit_todo,
            commands::toggle_todo,
            commands::delete_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

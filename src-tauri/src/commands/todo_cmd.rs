//! Tauri Commands for Todo CRUD
//!
//! Mutating commands always resolve with an `ActionResult`; failures are
//! part of the value, never a rejected call.

use tauri::State;

use crate::domain::{ActionResult, Item};
use crate::AppState;

/// List all todos (used once to seed the web view)
#[tauri::command]
pub async fn list_todos(state: State<'_, AppState>) -> Result<Vec<Item>, String> {
    state.todos.list_all().await.map_err(|e| e.to_string())
}

/// Create a todo
#[tauri::command]
pub async fn create_todo(
    state: State<'_, AppState>,
    text: String,
) -> Result<ActionResult<Item>, String> {
    Ok(state.todos.create(&text).await)
}

/// Replace a todo's text
#[tauri::command]
pub async fn edit_todo(
    state: State<'_, AppState>,
    id: String,
    text: String,
) -> Result<ActionResult<()>, String> {
    Ok(state.todos.edit(&id, &text).await)
}

/// Flip a todo's done flag
#[tauri::command]
pub async fn toggle_todo(state: State<'_, AppState>, id: String) -> Result<ActionResult<()>, String> {
    Ok(state.todos.toggle(&id).await)
}

/// Delete a todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: String) -> Result<ActionResult<()>, String> {
    Ok(state.todos.delete(&id).await)
}

//! Commands Layer
//!
//! Tauri command handlers that bridge the web view to the action layer.

mod todo_cmd;

pub use todo_cmd::*;

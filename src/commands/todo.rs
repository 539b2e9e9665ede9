//! Todo Commands
//!
//! Frontend bindings for the todo actions.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use todo_shared::TodoActions;
use wasm_bindgen::prelude::*;

use crate::models::{ActionResult, Item, TodoId};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: String,
}

#[derive(Serialize)]
struct EditArgs<'a> {
    id: String,
    text: &'a str,
}

/// Describe a rejected `invoke` (IPC failure, unknown command)
fn rejection(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Invoke a mutating command; every failure comes back as `Failure`
async fn call_action<T: DeserializeOwned>(cmd: &str, args: &impl Serialize) -> ActionResult<T> {
    let js_args = match serde_wasm_bindgen::to_value(args) {
        Ok(value) => value,
        Err(e) => return ActionResult::failure(e.to_string()),
    };
    match invoke(cmd, js_args).await {
        Ok(result) => serde_wasm_bindgen::from_value(result)
            .unwrap_or_else(|e| ActionResult::failure(e.to_string())),
        Err(err) => {
            web_sys::console::error_1(&format!("[IPC] {} rejected", cmd).into());
            ActionResult::failure(rejection(err))
        }
    }
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> Result<Vec<Item>, String> {
    let result = invoke("list_todos", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(text: &str) -> ActionResult<Item> {
    call_action("create_todo", &TextArgs { text }).await
}

pub async fn edit_todo(id: &TodoId, text: &str) -> ActionResult<()> {
    call_action("edit_todo", &EditArgs { id: id.to_string(), text }).await
}

pub async fn toggle_todo(id: &TodoId) -> ActionResult<()> {
    call_action("toggle_todo", &IdArgs { id: id.to_string() }).await
}

pub async fn delete_todo(id: &TodoId) -> ActionResult<()> {
    call_action("delete_todo", &IdArgs { id: id.to_string() }).await
}

/// Actions backed by Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriTodoActions;

#[async_trait(?Send)]
impl TodoActions for TauriTodoActions {
    async fn create(&self, text: &str) -> ActionResult<Item> {
        create_todo(text).await
    }

    async fn edit(&self, id: &TodoId, text: &str) -> ActionResult<()> {
        edit_todo(id, text).await
    }

    async fn toggle(&self, id: &TodoId) -> ActionResult<()> {
        toggle_todo(id).await
    }

    async fn delete(&self, id: &TodoId) -> ActionResult<()> {
        delete_todo(id).await
    }
}

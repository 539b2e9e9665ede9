//! Action Layer
//!
//! One operation per CRUD verb, each returning an [`ActionResult`]. All
//! mutating verbs share a single pipeline:
//! validate -> exists-check -> mutate -> translate.

mod pipeline;


use std::sync::Arc;

use crate::domain::{
    validate_id, validate_text, ActionError, ActionResult, Item, TodoId, ValidatedText,
};
use crate::repository::TodoRepository;

pub use pipeline::Operation;

/// Validated CRUD over a todo repository
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoRepository>) -> Self {
        Self { store }
    }

    /// Full collection, used to seed the web view
    pub async fn list_all(&self) -> Result<Vec<Item>, ActionError> {
        self.store
            .list_all()
            .await
            .map_err(|e| pipeline::storage_failure(Operation::List, &e))
    }

    pub async fn create(&self, text: &str) -> ActionResult<Item> {
        self.execute(
            Operation::Create,
            validate_text(text),
            |_| None,
            |store, text: ValidatedText| async move { store.insert(&text).await.map(Some) },
        )
        .await
    }

    pub async fn edit(&self, id: &str, text: &str) -> ActionResult<()> {
        let input = validate_id(id).and_then(|id| validate_text(text).map(|text| (id, text)));
        self.execute(
            Operation::Edit,
            input,
            |(id, _)| Some(*id),
            |store, (id, text): (TodoId, ValidatedText)| async move {
                store.update_text(&id, &text).await.map(|changed| changed.then_some(()))
            },
        )
        .await
    }

    pub async fn toggle(&self, id: &str) -> ActionResult<()> {
        self.execute(
            Operation::Toggle,
            validate_id(id),
            |id| Some(*id),
            |store, id: TodoId| async move {
                store.toggle_done(&id).await.map(|changed| changed.then_some(()))
            },
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> ActionResult<()> {
        self.execute(
            Operation::Delete,
            validate_id(id),
            |id| Some(*id),
            |store, id: TodoId| async move {
                store.remove(&id).await.map(|changed| changed.then_some(()))
            },
        )
        .await
    }
}

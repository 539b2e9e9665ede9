//! Shared action pipeline.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::domain::{ActionError, ActionResult, TodoId, ValidationError};
use crate::repository::{StoreError, StoreResult, TodoRepository};

use super::TodoService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Edit,
    Toggle,
    Delete,
}

impl Operation {
    /// Message shown to the caller when storage fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to load todos",
            Operation::Create => "Failed to create todo",
            Operation::Edit => "Failed to update todo",
            Operation::Toggle => "Failed to toggle todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Edit => "edit",
            Operation::Toggle => "toggle",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Log the full storage error and hand back the generic one
pub(super) fn storage_failure(op: Operation, err: &StoreError) -> ActionError {
    log::error!("{} failed in storage: {}", op, err);
    ActionError::Storage(op.failure_message())
}

impl TodoService {
    /// Run one action.
    ///
    /// `target` names the row that must already exist, if any. `mutate`
    /// returns `None` when no row matched, which is reported as not found;
    /// this also covers a row deleted between the check and the write.
    pub(super) async fn execute<V, T, F, Fut>(
        &self,
        op: Operation,
        input: Result<V, ValidationError>,
        target: impl FnOnce(&V) -> Option<TodoId>,
        mutate: F,
    ) -> ActionResult<T>
    where
        F: FnOnce(Arc<dyn TodoRepository>, V) -> Fut,
        Fut: Future<Output = StoreResult<Option<T>>>,
    {
        match self.run(op, input, target, mutate).await {
            Ok(value) => ActionResult::success(value),
            Err(e) => {
                log::debug!("{} rejected: {}", op, e);
                ActionResult::failure(e.to_string())
            }
        }
    }

    async fn run<V, T, F, Fut>(
        &self,
        op: Operation,
        input: Result<V, ValidationError>,
        target: impl FnOnce(&V) -> Option<TodoId>,
        mutate: F,
    ) -> Result<T, ActionError>
    where
        F: FnOnce(Arc<dyn TodoRepository>, V) -> Fut,
        Fut: Future<Output = StoreResult<Option<T>>>,
    {
        let input = input?;

        if let Some(id) = target(&input) {
            let found = self
                .store
                .exists(&id)
                .await
                .map_err(|e| storage_failure(op, &e))?;
            if !found {
                return Err(ActionError::NotFound);
            }
        }

        match mutate(self.store.clone(), input).await {
            Ok(Some(value)) => {
                log::info!("{} succeeded", op);
                Ok(value)
            }
            Ok(None) => Err(ActionError::NotFound),
            Err(e) => Err(storage_failure(op, &e)),
        }
    }
}

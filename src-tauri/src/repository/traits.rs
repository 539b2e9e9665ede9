//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for todo storage.
//! Implementations can use SQLite, in-memory, etc.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Item, TodoId};

/// Storage failure with full diagnostic detail.
///
/// Meant for logs; the action layer replaces it with a generic message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("malformed id {0:?} stored in todos")]
    CorruptId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Data access for todos.
///
/// Mutations report whether a row matched, so a caller can tell a missing
/// row from a successful write in one statement.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every todo, in insertion order
    async fn list_all(&self) -> StoreResult<Vec<Item>>;

    /// Store a new todo; the repository assigns its id
    async fn insert(&self, text: &str) -> StoreResult<Item>;

    async fn exists(&self, id: &TodoId) -> StoreResult<bool>;

    async fn update_text(&self, id: &TodoId, text: &str) -> StoreResult<bool>;

    /// Set `done` to the negation of its stored value
    async fn toggle_done(&self, id: &TodoId) -> StoreResult<bool>;

    async fn remove(&self, id: &TodoId) -> StoreResult<bool>;
}

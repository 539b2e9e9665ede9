//! Todo Repository
//!
//! SQLite-backed implementation of [`TodoRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Item, TodoId};
use super::traits::{StoreError, StoreResult, TodoRepository};

/// SQLite implementation of the todo repository
pub struct SqliteTodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> StoreResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, text, done FROM todos ORDER BY rowid ASC")?;
        let rows = stmt.query_map([], read_row)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(into_item(row?)?);
        }
        Ok(items)
    }

    async fn insert(&self, text: &str) -> StoreResult<Item> {
        let id = TodoId::from(Uuid::new_v4());
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO todos (id, text, done) VALUES (?1, ?2, 0)",
            params![id.to_string(), text],
        )?;

        Ok(Item::new(id, text.to_string()))
    }

    async fn exists(&self, id: &TodoId) -> StoreResult<bool> {
        let conn = self.conn.lock().await;
        let found = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1)",
            params![id.to_string()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(found)
    }

    async fn update_text(&self, id: &TodoId, text: &str) -> StoreResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE todos SET text = ?1, updated_at = strftime('%s', 'now') WHERE id = ?2",
            params![text, id.to_string()],
        )?;
        Ok(changed > 0)
    }

    async fn toggle_done(&self, id: &TodoId) -> StoreResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE todos SET done = NOT done, updated_at = strftime('%s', 'now') WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(changed > 0)
    }

    async fn remove(&self, id: &TodoId) -> StoreResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id.to_string()])?;
        Ok(changed > 0)
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<(String, String, bool)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

/// Convert raw column values to an Item
fn into_item((id, text, done): (String, String, bool)) -> StoreResult<Item> {
    let id = TodoId::parse(&id).ok_or_else(|| StoreError::CorruptId(id.clone()))?;
    Ok(Item { id, text, done })
}

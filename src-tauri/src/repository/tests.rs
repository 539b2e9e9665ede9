//! Repository Integration Tests
//!
//! Tests for SqliteTodoRepository with an in-memory SQLite database.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::TodoId;
use crate::repository::{init_db, SqliteTodoRepository, StoreError, TodoRepository};

fn setup_test_db() -> (SqliteTodoRepository, Arc<Mutex<rusqlite::Connection>>) {
    let conn = init_db(Path::new(":memory:")).expect("Failed to init test DB");
    let conn = Arc::new(Mutex::new(conn));
    (SqliteTodoRepository::new(conn.clone()), conn)
}

fn unknown_id() -> TodoId {
    TodoId::from(Uuid::from_u128(42))
}

#[tokio::test]
async fn test_insert_assigns_id() {
    let (repo, _) = setup_test_db();

    let a = repo.insert("Buy milk").await.expect("Failed to insert");
    let b = repo.insert("Buy milk").await.expect("Failed to insert");

    assert_ne!(a.id, b.id);
    assert_eq!(a.text, "Buy milk");
    assert!(!a.done);
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let (repo, _) = setup_test_db();

    let first = repo.insert("first").await.unwrap();
    let second = repo.insert("second").await.unwrap();
    let third = repo.insert("third").await.unwrap();

    let items = repo.list_all().await.expect("List failed");
    assert_eq!(items, vec![first, second, third]);
}

#[tokio::test]
async fn test_exists() {
    let (repo, _) = setup_test_db();
    let item = repo.insert("here").await.unwrap();

    assert!(repo.exists(&item.id).await.unwrap());
    assert!(!repo.exists(&unknown_id()).await.unwrap());
}

#[tokio::test]
async fn test_update_text() {
    let (repo, _) = setup_test_db();
    let item = repo.insert("Original").await.unwrap();

    assert!(repo.update_text(&item.id, "Updated").await.unwrap());
    assert_eq!(repo.list_all().await.unwrap()[0].text, "Updated");
    assert!(!repo.update_text(&unknown_id(), "nobody").await.unwrap());
}

#[tokio::test]
async fn test_toggle_done_flips_stored_value() {
    let (repo, _) = setup_test_db();
    let item = repo.insert("flip").await.unwrap();

    assert!(repo.toggle_done(&item.id).await.unwrap());
    assert!(repo.list_all().await.unwrap()[0].done);
    assert!(repo.toggle_done(&item.id).await.unwrap());
    assert!(!repo.list_all().await.unwrap()[0].done);
    assert!(!repo.toggle_done(&unknown_id()).await.unwrap());
}

#[tokio::test]
async fn test_remove() {
    let (repo, _) = setup_test_db();
    let item = repo.insert("To delete").await.unwrap();

    assert!(repo.remove(&item.id).await.expect("Delete failed"));
    assert!(!repo.exists(&item.id).await.unwrap());
    assert!(!repo.remove(&item.id).await.unwrap());
}

#[tokio::test]
async fn test_corrupt_row_is_reported() {
    let (repo, conn) = setup_test_db();
    conn.lock()
        .await
        .execute("INSERT INTO todos (id, text) VALUES ('bogus', 'x')", [])
        .unwrap();

    match repo.list_all().await {
        Err(StoreError::CorruptId(id)) => assert_eq!(id, "bogus"),
        other => panic!("expected CorruptId, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_table_surfaces_sqlite_error() {
    let (repo, conn) = setup_test_db();
    conn.lock().await.execute("DROP TABLE todos", []).unwrap();

    assert!(matches!(repo.insert("x").await, Err(StoreError::Sqlite(_))));
}

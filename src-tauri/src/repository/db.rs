//! Database Connection and Setup
//!
//! Opens the SQLite database and brings the schema up to date.

use std::path::Path;

use rusqlite::Connection;

use super::traits::{StoreError, StoreResult};

/// Open the database at `db_path` (`:memory:` for an in-memory one) and run
/// migrations.
pub fn init_db(db_path: &Path) -> StoreResult<Connection> {
    let conn = Connection::open(db_path).map_err(|source| StoreError::Open {
        path: db_path.to_path_buf(),
        source,
    })?;

    run_migrations(&conn)?;
    log::info!("database ready at {}", db_path.display());

    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id TEXT PRIMARY KEY NOT NULL,
            text TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        )",
        [],
    )?;

    if !column_exists(conn, "todos", "updated_at")? {
        conn.execute("ALTER TABLE todos ADD COLUMN updated_at INTEGER", [])?;
    }

    Ok(())
}

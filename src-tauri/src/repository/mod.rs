//! Repository Layer
//!
//! Persistence gateway for the `todos` table.

mod traits;
mod db;
mod todo_repo;

#[cfg(test)]
mod tests;

pub use traits::{StoreError, StoreResult, TodoRepository};
pub use db::init_db;
pub use todo_repo::SqliteTodoRepository;

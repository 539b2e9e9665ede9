//! Frontend Models
//!
//! Data structures shared with the core process.

pub use todo_shared::{ActionResult, Item, TodoId};

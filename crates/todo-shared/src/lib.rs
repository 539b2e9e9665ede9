//! Todo Shared
//!
//! Types exchanged between the core process and the web view, plus the
//! optimistic state controller used by the web view.

mod model;
mod result;
mod optimistic;

pub use model::{Item, TodoId};
pub use result::ActionResult;
pub use optimistic::{
    flip_done, merge_loaded, remove_item, set_text, ItemCollection, OptimisticTodos, TodoActions,
};

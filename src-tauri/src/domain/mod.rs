//! Domain Layer
//!
//! Todo entity (shared with the web view), input validation and the error
//! taxonomy surfaced by actions.
//! This layer does not touch storage.

mod error;
mod validation;

pub use error::ActionError;
pub use todo_shared::{ActionResult, Item, TodoId};
pub use validation::{validate_id, validate_text, ValidatedText, ValidationError};

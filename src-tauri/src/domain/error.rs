//! Action Errors
//!
//! What a caller of the action layer can be told. Storage detail never
//! appears here; it is logged where it happens.

use thiserror::Error;

use super::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Rejected user input, surfaced verbatim
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Identifier absent at mutation time
    #[error("Todo not found")]
    NotFound,
    /// Generic message standing in for a storage failure
    #[error("{0}")]
    Storage(&'static str),
}

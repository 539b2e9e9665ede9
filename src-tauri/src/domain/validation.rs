//! Input Validation
//!
//! Pure checks run before any store access.

use std::ops::Deref;

use thiserror::Error;

use super::TodoId;

/// Longest allowed todo text, in characters, after trimming
pub const MAX_TEXT_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Todo text cannot be empty")]
    EmptyText,
    #[error("Todo text must be at most {max} characters")]
    TooLong { max: usize },
    #[error("Invalid todo id")]
    MalformedId,
}

/// Trimmed, non-empty text no longer than [`MAX_TEXT_LEN`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText(String);

impl ValidatedText {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ValidatedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

pub fn validate_text(text: &str) -> Result<ValidatedText, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong { max: MAX_TEXT_LEN });
    }
    Ok(ValidatedText(trimmed.to_string()))
}

pub fn validate_id(id: &str) -> Result<TodoId, ValidationError> {
    TodoId::parse(id).ok_or(ValidationError::MalformedId)
}

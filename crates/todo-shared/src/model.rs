//! Todo Item
//!
//! The single entity stored in the `todos` table.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Parse the lowercase hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
    ///
    /// Other textual UUID encodings (simple, braced, urn, uppercase) are
    /// rejected, so a parsed id always displays as its input.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 36 {
            return None;
        }
        let uuid = Uuid::try_parse(s).ok()?;
        if uuid.hyphenated().to_string() != s {
            return None;
        }
        Some(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A todo item (matches a row in `todos`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, immutable once assigned
    pub id: TodoId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion status
    pub done: bool,
}

impl Item {
    /// A freshly stored item is never done.
    pub fn new(id: TodoId, text: String) -> Self {
        Self { id, text, done: false }
    }
}

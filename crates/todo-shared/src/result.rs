//! Action Result
//!
//! Uniform outcome returned by every mutating action.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Success carrying a value, or failure carrying a user-facing message.
///
/// Serialized as `{"status": "success", "payload": ...}` or
/// `{"status": "failure", "payload": "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "lowercase")]
pub enum ActionResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ActionResult<T> {
    pub fn success(value: T) -> Self {
        ActionResult::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ActionResult::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            ActionResult::Success(_) => None,
            ActionResult::Failure(msg) => Some(msg),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        match self {
            ActionResult::Success(value) => ActionResult::Success(f(value)),
            ActionResult::Failure(msg) => ActionResult::Failure(msg),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ActionResult::Success(value) => Ok(value),
            ActionResult::Failure(msg) => Err(msg),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for ActionResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ActionResult::Success(value),
            Err(e) => ActionResult::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let ok: ActionResult<u32> = ActionResult::success(7);
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"status": "success", "payload": 7}));

        let unit: ActionResult<()> = ActionResult::success(());
        assert_eq!(serde_json::to_value(&unit).unwrap(), json!({"status": "success", "payload": null}));

        let failed: ActionResult<()> = ActionResult::failure("Todo not found");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"status": "failure", "payload": "Todo not found"})
        );
    }

    #[test]
    fn test_decode_failure() {
        let decoded: ActionResult<()> =
            serde_json::from_value(json!({"status": "failure", "payload": "boom"})).unwrap();
        assert_eq!(decoded.error(), Some("boom"));
        assert!(decoded.is_failure());
    }

    #[test]
    fn test_from_result() {
        let failed: ActionResult<u8> = Err::<u8, _>("nope").into();
        assert_eq!(failed.into_result(), Err("nope".to_string()));
        let ok: ActionResult<u8> = Ok::<u8, String>(1).into();
        assert_eq!(ok.map(|v| v + 1), ActionResult::Success(2));
    }
}

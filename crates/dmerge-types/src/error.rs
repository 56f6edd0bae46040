use serde_json::Value;
use thiserror::Error;

use crate::path::KeyPath;
use crate::value::natural_string;

/// Two values at the same key path could not be reconciled.
///
/// Raised by the merge engine when the resolver chain is empty or every
/// resolver delegates, and by resolvers themselves when they want to reject
/// a conflict with their own values in the message.
#[derive(Clone, Debug, PartialEq, Error)]
#[error(
    "Conflict detected for key '{path}': {lhs} != {rhs}",
    lhs = natural_string(.first),
    rhs = natural_string(.second)
)]
pub struct ConflictError {
    /// Where the conflict occurred.
    pub path: KeyPath,
    /// The value from the base structure.
    pub first: Value,
    /// The value from the incoming structure.
    pub second: Value,
}

impl ConflictError {
    /// Create a conflict error for `path`.
    pub fn new(
        path: impl Into<KeyPath>,
        first: impl Into<Value>,
        second: impl Into<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, ConflictError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_uses_dotted_path_and_plain_strings() {
        let err = ConflictError::new(["info", "version"], "1.0.0", "1.0.1");
        assert_eq!(
            err.to_string(),
            "Conflict detected for key 'info.version': 1.0.0 != 1.0.1"
        );
    }

    #[test]
    fn message_with_non_string_values() {
        let err = ConflictError::new(["n"], json!(1), json!([1, 2]));
        assert_eq!(err.to_string(), "Conflict detected for key 'n': 1 != [1,2]");
    }

    #[test]
    fn custom_values_are_rendered_verbatim() {
        let err = ConflictError::new(["info", "version"], "'1.0.0'", "'1.0.1'");
        assert_eq!(
            err.to_string(),
            "Conflict detected for key 'info.version': '1.0.0' != '1.0.1'"
        );
    }

    #[test]
    fn fields_are_exposed() {
        let err = ConflictError::new(["a"], json!(null), json!(false));
        assert_eq!(err.path, ["a"]);
        assert_eq!(err.first, Value::Null);
        assert_eq!(err.second, json!(false));
    }
}

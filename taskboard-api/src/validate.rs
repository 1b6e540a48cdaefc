/// Ordered request-field validation
///
/// Every mutating handler validates its JSON payload field by field, in
/// declaration order, so the response always carries the first failing
/// check's message. Payloads arrive as raw `serde_json::Value` because the
/// contract distinguishes wrong-type from wrong-length per field; a typed
/// extractor would collapse both into one rejection.
///
/// Presence is decided by the payload's keys: an absent key is `None`, a
/// present key with the wrong type (including `null`) is an error, and a
/// present-but-falsy value (empty string, zero) is validated like any
/// other value instead of being ignored.

use crate::error::ApiError;
use serde_json::Value;

/// Extracts a required string field
///
/// Missing keys and non-string values produce the same type error.
pub fn required_string(body: &Value, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ApiError::BadRequest(format!("'{}' must be a string", field))),
    }
}

/// Extracts an optional string field
///
/// Returns None when the key is absent; errors when the key is present
/// with a non-string value.
pub fn optional_string(body: &Value, field: &str) -> Result<Option<String>, ApiError> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::BadRequest(format!("'{}' must be a string", field))),
    }
}

/// Extracts the optional status field
///
/// Returns None when the key is absent; errors when the key is present
/// with a non-numeric value.
pub fn optional_status(body: &Value, field: &str) -> Result<Option<i32>, ApiError> {
    let message = || {
        ApiError::BadRequest(format!(
            "'{}' must be a number (0 for incomplete, 1 for complete)",
            field
        ))
    };

    match body.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => {
            let status = n.as_i64().and_then(|v| i32::try_from(v).ok());
            status.map(Some).ok_or_else(message)
        }
        Some(_) => Err(message()),
    }
}

/// Enforces a minimum character count on a field value
pub fn min_length(value: &str, field: &str, min: usize) -> Result<(), ApiError> {
    if value.chars().count() < min {
        return Err(ApiError::BadRequest(format!(
            "'{}' must be at least {} characters long",
            field, min
        )));
    }
    Ok(())
}

/// Enforces the sentinel-letter prefix on an id
///
/// User ids start with 'f', task ids with 't'.
pub fn require_prefix(value: &str, field: &str, prefix: char) -> Result<(), ApiError> {
    if !value.starts_with(prefix) {
        return Err(ApiError::BadRequest(format!(
            "'{}' must start with the letter '{}'",
            field, prefix
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_string_accepts_string() {
        let body = json!({"id": "f001"});
        assert_eq!(required_string(&body, "id").unwrap(), "f001");
    }

    #[test]
    fn test_required_string_rejects_missing_and_non_string() {
        let body = json!({"id": 123});
        let err = required_string(&body, "id").unwrap_err();
        assert_eq!(err.to_string(), "'id' must be a string");

        let body = json!({});
        let err = required_string(&body, "id").unwrap_err();
        assert_eq!(err.to_string(), "'id' must be a string");
    }

    #[test]
    fn test_optional_string_absent_is_none() {
        let body = json!({});
        assert!(optional_string(&body, "title").unwrap().is_none());
    }

    #[test]
    fn test_optional_string_null_is_an_error() {
        let body = json!({"title": null});
        assert!(optional_string(&body, "title").is_err());
    }

    #[test]
    fn test_optional_string_empty_is_present() {
        // An explicit empty string is a value, not an omission
        let body = json!({"title": ""});
        assert_eq!(optional_string(&body, "title").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_optional_status_zero_is_present() {
        let body = json!({"status": 0});
        assert_eq!(optional_status(&body, "status").unwrap(), Some(0));
    }

    #[test]
    fn test_optional_status_rejects_non_number() {
        let body = json!({"status": "done"});
        let err = optional_status(&body, "status").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'status' must be a number (0 for incomplete, 1 for complete)"
        );
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(min_length("f001", "id", 4).is_ok());
        let err = min_length("f1", "id", 4).unwrap_err();
        assert_eq!(err.to_string(), "'id' must be at least 4 characters long");
    }

    #[test]
    fn test_require_prefix() {
        assert!(require_prefix("f001", "id", 'f').is_ok());
        let err = require_prefix("x001", "id", 'f').unwrap_err();
        assert_eq!(err.to_string(), "'id' must start with the letter 'f'");
    }
}

// ============================================================================
// ERRORS - API error taxonomy + backend error normalizer
// ============================================================================
// The backend replies with FastAPI-shaped payloads:
//   {"detail": "plain message"}
//   {"detail": [{"loc": ["body", "amount"], "msg": "...", "type": "..."}]}
// parse_error() flattens every failure shape into one display string.
// ============================================================================

use serde_json::Value;
use thiserror::Error;

/// Shown when no better message can be extracted from a failure.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authenticated call hit a 401. The dispatcher has already torn the
    /// session down and started the login redirect.
    #[error("Authentication required")]
    AuthenticationRequired,
    /// Non-2xx response; `message` carries the raw backend body when the
    /// server sent one.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    /// Transport failure, no response received.
    #[error("Network error: {0}")]
    Network(String),
    /// A body could not be (de)serialized.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Normalize any [`ApiError`] into a single human-readable string.
pub fn parse_error(error: &ApiError) -> String {
    match error {
        ApiError::RequestFailed { message, .. } => normalize_backend_payload(message),
        other => non_empty_or_fallback(&other.to_string()),
    }
}

fn normalize_backend_payload(raw: &str) -> String {
    let payload: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        // Not JSON: surface the server text as-is.
        Err(_) => return non_empty_or_fallback(raw),
    };

    let Value::Object(fields) = payload else {
        return non_empty_or_fallback(raw);
    };

    match fields.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(entries)) => format_validation_errors(entries),
        // detail of an unexpected shape carries nothing worth showing
        Some(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        None => match fields.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => FALLBACK_ERROR_MESSAGE.to_string(),
        },
    }
}

/// One line per validation entry, input order preserved.
fn format_validation_errors(entries: &[Value]) -> String {
    let lines: Vec<String> = entries.iter().map(format_validation_entry).collect();
    if lines.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        lines.join("\n")
    }
}

fn format_validation_entry(entry: &Value) -> String {
    let msg = entry
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("Invalid value");

    // The last loc segment is the field name ("body.amount" -> "amount");
    // numeric segments (array indices) are used as-is.
    match entry.get("loc").and_then(Value::as_array).and_then(|loc| loc.last()) {
        Some(Value::String(field)) => format!("{}: {}", capitalize_first(field), msg),
        Some(Value::Number(index)) => format!("{}: {}", index, msg),
        _ => msg.to_string(),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty_or_fallback(text: &str) -> String {
    if text.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(body: &str) -> ApiError {
        ApiError::RequestFailed {
            status: 422,
            message: body.to_string(),
        }
    }

    #[test]
    fn string_detail_passes_through_verbatim() {
        let error = failed(r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(parse_error(&error), "Invalid credentials");
    }

    #[test]
    fn validation_entry_uses_last_loc_segment_capitalized() {
        let error = failed(r#"{"detail":[{"loc":["body","amount"],"msg":"must be positive"}]}"#);
        assert_eq!(parse_error(&error), "Amount: must be positive");
    }

    #[test]
    fn validation_entries_join_with_newline_in_order() {
        let error = failed(
            r#"{"detail":[
                {"loc":["body","symbol"],"msg":"field required"},
                {"loc":["body","quantity"],"msg":"must be positive"}
            ]}"#,
        );
        assert_eq!(
            parse_error(&error),
            "Symbol: field required\nQuantity: must be positive"
        );
    }

    #[test]
    fn numeric_loc_segment_is_not_capitalized() {
        let error = failed(r#"{"detail":[{"loc":["body","holdings",0],"msg":"invalid symbol"}]}"#);
        assert_eq!(parse_error(&error), "0: invalid symbol");
    }

    #[test]
    fn missing_loc_falls_back_to_bare_message() {
        let error = failed(r#"{"detail":[{"msg":"something odd"}]}"#);
        assert_eq!(parse_error(&error), "something odd");
    }

    #[test]
    fn object_detail_yields_fixed_message() {
        let error = failed(r#"{"detail":{"code":500}}"#);
        assert_eq!(parse_error(&error), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn message_field_used_when_detail_absent() {
        let error = failed(r#"{"message":"Service unavailable"}"#);
        assert_eq!(parse_error(&error), "Service unavailable");
    }

    #[test]
    fn non_json_body_passes_through() {
        let error = failed("Internal Server Error");
        assert_eq!(parse_error(&error), "Internal Server Error");
    }

    #[test]
    fn empty_body_yields_fallback() {
        let error = failed("");
        assert_eq!(parse_error(&error), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn network_error_surfaces_its_own_message() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(parse_error(&error), "Network error: connection refused");
    }

    #[test]
    fn authentication_required_has_a_message() {
        assert_eq!(
            parse_error(&ApiError::AuthenticationRequired),
            "Authentication required"
        );
    }
}

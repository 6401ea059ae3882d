use serde_json::Value;

/// Pull a human readable message out of an error response body.
///
/// The lookup backend answers errors with a bare JSON string
/// (`"Invalid address"`), other servers tend to wrap it in an object.
/// Anything else non-blank is passed through as plain text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(message)) => non_blank(message),
        Ok(Value::Object(map)) => ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .and_then(non_blank),
        // Numbers, arrays and the like say nothing useful
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

fn non_blank(message: String) -> Option<String> {
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

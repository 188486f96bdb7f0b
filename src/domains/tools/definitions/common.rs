//! Common utilities shared across catalog tools.
//!
//! Response formatting and error handling helpers. Every catalog error is
//! turned into an error-flagged tool result here; tools never surface a
//! protocol-level fault for bad input.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create a success result carrying a payload as pretty-printed JSON text.
pub fn json_result<T: Serialize>(payload: &T) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Create an error result with a human-readable message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Wrap a tool result in the JSON shape the HTTP transport returns.
#[cfg(feature = "http")]
pub fn http_result(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

#[cfg(test)]
pub mod test_support {
    use rmcp::model::CallToolResult;

    /// Extract the text of the first content item from a tool result.
    pub fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::result_text;

    #[test]
    fn test_json_result_is_pretty_json() {
        #[derive(Serialize)]
        struct Payload {
            total: usize,
        }

        let result = json_result(&Payload { total: 3 });
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed["total"], 3);
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("Category not found: react");
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Category not found"));
    }
}

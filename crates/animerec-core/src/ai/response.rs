//! Response text extraction

use serde_json::Value;

/// Shown when the response has no text at the expected path
pub const NO_CONTENT_FALLBACK: &str = "No response content found.";

/// Text at `candidates[0].content.parts[0].text`, or the fallback
pub fn extract_text(json: &Value) -> String {
    json.get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|arr| arr.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or(NO_CONTENT_FALLBACK)
        .to_string()
}

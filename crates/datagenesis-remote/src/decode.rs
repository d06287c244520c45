use serde::de::DeserializeOwned;

use crate::errors::{RemoteError, Result};

/// Strip a Markdown code fence around a JSON body, if present.
///
/// AI-backed services sometimes answer with ```` ```json ... ``` ````.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };
    let after = &trimmed[start + 3..];
    let after = after.strip_prefix("json").unwrap_or(after);
    let body = match after.find("```") {
        Some(end) => &after[..end],
        None => after,
    };
    body.trim()
}

/// Decode a response body, tolerating a surrounding code fence.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|err| RemoteError::Malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_body_is_untouched() {
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn json_fence_is_removed() {
        let text = "Here you go:\n```json\n{\"a\": 1}\n```\nthanks";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn bare_fence_is_removed() {
        assert_eq!(strip_code_fence("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn undecodable_body_is_malformed() {
        let err = decode_body::<serde_json::Value>("<html>502</html>").expect_err("html body");
        assert!(matches!(err, RemoteError::Malformed(_)));
    }
}

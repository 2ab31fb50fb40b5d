//! Parsing of the extraction model's free-form response.

use serde_json::Value;

use crate::error::ExtractionError;

/// Parse a model response expected to contain a JSON object.
///
/// Strips a wrapping markdown code fence (with an optional `json` language
/// tag after the opening fence) before parsing.
pub fn parse_model_response(text: &str) -> Result<Value, ExtractionError> {
    let body = strip_code_fence(text.trim());
    Ok(serde_json::from_str(body.trim())?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.find("```") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_bare_json() {
        let parsed = parse_model_response(r#"{"lastName": "כהן"}"#).unwrap();
        assert_eq!(parsed, json!({"lastName": "כהן"}));
    }

    #[test]
    fn test_strips_plain_fence() {
        let parsed = parse_model_response("```\n{\"a\": 1}\n```").unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_strips_fence_with_language_tag() {
        let parsed = parse_model_response("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_tolerates_missing_closing_fence() {
        let parsed = parse_model_response("```json\n{\"a\": 1}").unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(parse_model_response("I could not find any fields.").is_err());
        assert!(parse_model_response("").is_err());
    }
}

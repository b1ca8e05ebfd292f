//! Pulling a JSON object out of free-form model text, as a two-step
//! contract: locate the span, then strictly decode it. The model is told to
//! answer with JSON only, but in practice wraps it in prose or markdown
//! fences, so every generator funnels its reply through here.

use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Return the first balanced top-level `{...}` span in `text`, ignoring
/// braces inside JSON string literals. Leading and trailing prose is
/// discarded; a later second object is never considered.
pub fn extract_json_object(text: &str) -> AppResult<&str> {
    let start = text
        .find('{')
        .ok_or_else(|| AppError::MalformedResponse("Invalid response format from AI".to_string()))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    Err(AppError::MalformedResponse(
        "Invalid response format from AI".to_string(),
    ))
}

/// Strictly decode an extracted span. A decode failure is fatal for the
/// request; nothing is retried.
pub fn decode_json<T: DeserializeOwned>(span: &str) -> AppResult<T> {
    serde_json::from_str(span)
        .map_err(|e| AppError::MalformedResponse(format!("Invalid response format from AI: {e}")))
}

pub fn extract_and_decode<T: DeserializeOwned>(text: &str) -> AppResult<T> {
    decode_json(extract_json_object(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_embedded_in_prose() {
        let text = "Sure! Here is the JSON you asked for:\n{\"a\":1,\"b\":2}\nLet me know if you need more.";
        assert_eq!(extract_json_object(text).unwrap(), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn extracts_first_object_even_when_later_braces_exist() {
        let text = r#"{"a":1} and then {"b":2}"#;
        assert_eq!(extract_json_object(text).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn ignores_braces_inside_string_literals() {
        let text = r#"prefix {"body": "look at } this {", "n": 1} suffix"#;
        assert_eq!(
            extract_json_object(text).unwrap(),
            r#"{"body": "look at } this {", "n": 1}"#
        );
    }

    #[test]
    fn handles_escaped_quotes_inside_strings() {
        let text = r#"{"quote": "she said \"}\" loudly"}"#;
        assert_eq!(extract_json_object(text).unwrap(), text);
    }

    #[test]
    fn handles_nested_objects() {
        let text = r#"```json
{"outer": {"inner": {"deep": true}}}
```"#;
        assert_eq!(
            extract_json_object(text).unwrap(),
            r#"{"outer": {"inner": {"deep": true}}}"#
        );
    }

    #[test]
    fn missing_braces_is_malformed_response() {
        let err = extract_json_object("no json here at all").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn unterminated_object_is_malformed_response() {
        let err = extract_json_object(r#"{"a": 1"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn decode_rejects_invalid_json_span() {
        let err = decode_json::<serde_json::Value>("{invalid}").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn extract_and_decode_round_trips_typed_payloads() {
        #[derive(serde::Deserialize)]
        struct Payload {
            a: i32,
        }

        let payload: Payload = extract_and_decode("noise {\"a\": 7} noise").unwrap();
        assert_eq!(payload.a, 7);
    }
}

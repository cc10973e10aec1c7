//! Locating and parsing the JSON object in a model reply.

use crate::llm::provider::LlmError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Remove a surrounding Markdown code fence, with or without a language tag.
fn strip_fences(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// The first balanced `{...}` span, ignoring braces inside string literals.
pub fn first_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Find the JSON object in a reply.
///
/// The trimmed, de-fenced reply is parsed whole first; failing that, the
/// first balanced object span is tried.
pub fn locate_object(reply: &str) -> Result<Value, LlmError> {
    let text = strip_fences(reply);
    if text.is_empty() {
        return Err(LlmError::EmptyReply);
    }

    let whole_error = match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => return Ok(value),
        Ok(_) => "expected a JSON object".to_string(),
        Err(e) => e.to_string(),
    };

    match first_object_span(text) {
        Some(span) => match serde_json::from_str::<Value>(span) {
            Ok(value) => Ok(value),
            Err(e) => Err(LlmError::MalformedReply(e.to_string())),
        },
        None => Err(LlmError::MalformedReply(whole_error)),
    }
}

/// Locate the object and deserialize it into a draft.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, LlmError> {
    let value = locate_object(reply)?;
    serde_json::from_value(value).map_err(|e| LlmError::MalformedReply(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_protocol::config_models::CrewDraft;

    #[test]
    fn test_plain_object() {
        let value = locate_object(r#"  {"agents": []}  "#).expect("object");
        assert_eq!(value["agents"], Value::Array(vec![]));
    }

    #[test]
    fn test_fenced_object() {
        let reply = "```json\n{\"agents\": [{\"name\": \"a\"}]}\n```";
        let value = locate_object(reply).expect("object");
        assert_eq!(value["agents"][0]["name"], "a");

        let bare_fence = "```\n{\"tasks\": []}\n```";
        assert!(locate_object(bare_fence).is_ok());
    }

    #[test]
    fn test_object_embedded_in_prose() {
        let reply = "Here is your crew:\n{\"agents\": [{\"name\": \"x\", \"goal\": \"use {braces} in \\\"text\\\"\"}]}\nHope this helps!";
        let value = locate_object(reply).expect("object");
        assert_eq!(value["agents"][0]["goal"], "use {braces} in \"text\"");
    }

    #[test]
    fn test_first_span_only() {
        assert_eq!(first_object_span("a {\"x\": 1} b {\"y\": 2}"), Some("{\"x\": 1}"));
        assert_eq!(first_object_span("{\"s\": \"}\"}"), Some("{\"s\": \"}\"}"));
        assert_eq!(first_object_span("no braces"), None);
        assert_eq!(first_object_span("{ unbalanced"), None);
    }

    #[test]
    fn test_malformed_and_empty() {
        assert!(matches!(
            locate_object("I cannot help with that."),
            Err(LlmError::MalformedReply(_))
        ));
        assert!(matches!(locate_object("```json\n```"), Err(LlmError::EmptyReply)));
        assert!(matches!(
            locate_object("[1, 2, 3]"),
            Err(LlmError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_reply_into_draft() {
        let draft: CrewDraft =
            parse_reply("```json\n{\"agents\": [{\"name\": \"writer\"}]}\n```").expect("draft");
        let agents = draft.agents.expect("agents key present");
        assert_eq!(agents[0].name.as_deref(), Some("writer"));
        assert!(draft.tasks.is_none());
    }
}

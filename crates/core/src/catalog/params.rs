//! Parameter validation against a tool's schema.

use super::{get, ParamType};
use serde_json::{Map, Value};

/// Validates user-supplied parameter values for a tool.
///
/// Returns one message per problem, in schema order for missing required
/// parameters followed by coercion failures in the order values were
/// supplied. An empty list means the values are usable.
pub fn validate_parameters(tool_id: &str, values: &Map<String, Value>) -> Vec<String> {
    let Some(tool) = get(tool_id) else {
        return vec!["Invalid tool name".to_string()];
    };

    let mut errors = Vec::new();

    for spec in tool.parameters.iter().filter(|p| p.required) {
        if values.get(spec.name).map_or(true, is_falsy) {
            errors.push(format!("Missing required parameter: {}", spec.name));
        }
    }

    for (name, value) in values {
        let Some(spec) = tool.parameter(name) else {
            continue;
        };
        if is_falsy(value) && !spec.required {
            continue;
        }
        if !coerces_to(value, spec.kind) {
            errors.push(format!("Parameter {} must be {}", name, type_phrase(spec.kind)));
        }
    }

    errors
}

/// Builds the configuration object for a tool: `{"type": id, ...values}`
/// with empty strings and nulls removed.
pub fn format_tool_config(tool_id: &str, values: &Map<String, Value>) -> Value {
    let mut config = Map::new();
    config.insert("type".to_string(), Value::String(tool_id.to_string()));
    for (name, value) in values {
        match value {
            Value::Null => continue,
            Value::String(s) if s.is_empty() => continue,
            _ => {
                config.insert(name.clone(), value.clone());
            }
        }
    }
    Value::Object(config)
}

fn type_phrase(kind: ParamType) -> &'static str {
    match kind {
        ParamType::Str => "a string",
        ParamType::Int => "an integer",
        ParamType::Float => "a float",
        ParamType::Bool => "a boolean",
        ParamType::List => "a list",
        ParamType::Dict => "a mapping",
    }
}

/// Empty-ish values: null, false, zero, and empty strings, lists or maps.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |x| x == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn coerces_to(value: &Value, kind: ParamType) -> bool {
    match kind {
        ParamType::Int => match value {
            Value::Number(_) | Value::Bool(_) => true,
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        },
        ParamType::Float => match value {
            Value::Number(_) | Value::Bool(_) => true,
            Value::String(s) => s.trim().parse::<f64>().is_ok(),
            _ => false,
        },
        ParamType::Bool => match value {
            Value::Bool(_) => true,
            Value::String(s) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
            }
            _ => false,
        },
        ParamType::Str => !matches!(value, Value::Array(_) | Value::Object(_)),
        ParamType::List => matches!(value, Value::Array(_) | Value::String(_)),
        ParamType::Dict => match value {
            Value::Object(_) => true,
            Value::String(s) => matches!(serde_json::from_str::<Value>(s), Ok(Value::Object(_))),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test parameters must be an object"),
        }
    }

    #[test]
    fn test_unknown_tool() {
        let errors = validate_parameters("NoSuchTool", &Map::new());
        assert_eq!(errors, vec!["Invalid tool name"]);
    }

    #[test]
    fn test_missing_required_parameter() {
        let errors = validate_parameters("SerperDevTool", &Map::new());
        assert_eq!(errors, vec!["Missing required parameter: api_key"]);
    }

    #[test]
    fn test_falsy_required_value_counts_as_missing() {
        let errors = validate_parameters("GoogleSearchTool", &params(json!({
            "api_key": "",
            "cse_id": null
        })));
        assert_eq!(
            errors,
            vec![
                "Missing required parameter: api_key",
                "Missing required parameter: cse_id"
            ]
        );
    }

    #[test]
    fn test_valid_parameters() {
        let errors = validate_parameters("SerperDevTool", &params(json!({
            "api_key": "sk-123",
            "num_results": "25",
            "include_answer": true
        })));
        assert!(errors.is_empty(), "Unexpected errors: {errors:?}");
    }

    #[test]
    fn test_type_errors() {
        let errors = validate_parameters("SerperDevTool", &params(json!({
            "api_key": "sk-123",
            "num_results": "lots",
            "include_images": "maybe"
        })));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"Parameter num_results must be an integer".to_string()));
        assert!(errors.contains(&"Parameter include_images must be a boolean".to_string()));
    }

    #[test]
    fn test_float_and_dict_coercion() {
        let errors = validate_parameters("ScrapeWebsiteTool", &params(json!({
            "url": "https://example.com",
            "wait_for": "soon"
        })));
        assert_eq!(errors, vec!["Parameter wait_for must be a float"]);

        let errors = validate_parameters("LlamaIndexTool", &params(json!({
            "index_path": "./index",
            "query_engine_kwargs": "{\"top_k\": 3}"
        })));
        assert!(errors.is_empty());

        let errors = validate_parameters("LlamaIndexTool", &params(json!({
            "index_path": "./index",
            "query_engine_kwargs": [1, 2]
        })));
        assert_eq!(errors, vec!["Parameter query_engine_kwargs must be a mapping"]);
    }

    #[test]
    fn test_empty_optional_values_are_skipped() {
        let errors = validate_parameters("SerperDevTool", &params(json!({
            "api_key": "sk-123",
            "num_results": "",
            "include_answer": false
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let errors = validate_parameters("PythonREPLTool", &params(json!({
            "color": [1, 2, 3]
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_format_tool_config_drops_empty_values() {
        let config = format_tool_config("FileReadTool", &params(json!({
            "file_path": "notes.txt",
            "encoding": "",
            "extra": null
        })));
        assert_eq!(config, json!({"type": "FileReadTool", "file_path": "notes.txt"}));
    }
}

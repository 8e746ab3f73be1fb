//! Helpers shared by the registrar tools.

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use rmcp::handler::server::tool::schema_for_type;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Deserialize tool arguments into a typed parameter struct.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Reject an empty array argument.
pub fn require_non_empty<T>(field: &str, items: &[T]) -> Result<(), ToolError> {
    if items.is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "`{}` must contain at least one entry",
            field
        )));
    }
    Ok(())
}

/// Wrap a value as pretty-printed JSON in a single text content item.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Tool metadata with the input schema derived from `P`.
pub fn tool_definition<P: JsonSchema + 'static>(
    name: &'static str,
    description: &'static str,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: schema_for_type::<P>().into(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        sld: String,
    }

    #[test]
    fn test_parse_params_reports_missing_field() {
        let err = parse_params::<Sample>(JsonObject::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("sld")));
    }

    #[test]
    fn test_parse_params_ok() {
        let mut args = JsonObject::new();
        args.insert("sld".into(), Value::String("example".into()));
        assert_eq!(parse_params::<Sample>(args).unwrap().sld, "example");
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty::<String>("hosts", &[]).is_err());
        assert!(require_non_empty("hosts", &["a"]).is_ok());
    }

    #[test]
    fn test_json_result_is_pretty_text() {
        let result = json_result(&serde_json::json!({"a": 1})).unwrap();
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "{\n  \"a\": 1\n}");
        assert_ne!(result.is_error, Some(true));
    }
}

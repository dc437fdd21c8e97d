//! MCP protocol types (JSON-RPC 2.0 over line-delimited stdio)

use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{ErrorCode, McpError};

/// JSON-RPC version tag
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id, kept as the exact JSON text the client sent
pub type RequestId = Box<RawValue>;

/// Inbound JSON-RPC message
///
/// A message without an `id` (or with `"id": null`) is a notification and is
/// never answered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonRpcMessage {
    /// JSON-RPC version, normally "2.0"
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Correlation id, echoed verbatim in the response
    #[serde(default)]
    pub id: Option<RequestId>,
    /// Method name
    #[serde(default)]
    pub method: Option<String>,
    /// Method parameters, in whatever shape the client sent them
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcMessage {
    /// Parse one input line
    ///
    /// The line must hold a single JSON object. The shape of `params` is
    /// left for the method handler to judge.
    pub fn parse(line: &[u8]) -> Result<Self, McpError> {
        if line.trim_ascii_start().first() != Some(&b'{') {
            return Err(McpError::Parse(serde::de::Error::custom(
                "expected a JSON object",
            )));
        }
        serde_json::from_slice(line).map_err(McpError::Parse)
    }

    /// Parameters as an object; absent parameters read as an empty object
    pub fn params_object(&self) -> Result<Map<String, Value>, McpError> {
        match &self.params {
            None => Ok(Map::new()),
            Some(Value::Object(params)) => Ok(params.clone()),
            Some(_) => Err(McpError::InvalidParams(
                "'params' must be an object".to_string(),
            )),
        }
    }

    /// Method name, empty when absent
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or_default()
    }

    /// Whether this message expects no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outbound JSON-RPC response
///
/// Carries exactly one of `result` or `error`; absent fields are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: &'static str,
    /// Request ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    /// Result data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Create a new error response
    pub fn failure(id: Option<RequestId>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(ErrorObject {
                code,
                message: message.into(),
            }),
        }
    }

    /// Error response describing `err`
    pub fn from_error(id: Option<RequestId>, err: &McpError) -> Self {
        Self::failure(id, err.error_code(), err.to_string())
    }
}

/// Error detail structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    /// Error code token
    pub code: ErrorCode,
    /// Error message
    pub message: String,
}

/// Server identity sent in answer to `initialize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Protocol version
    pub protocol_version: String,
    /// Server info
    pub server_info: ServerInfo,
    /// Capabilities
    pub capabilities: ServerCapabilities,
}

/// MCP server info
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Server capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerCapabilities {
    /// Tools capability
    pub tools: ToolsCapability,
}

/// Tools capability; serialized as an empty object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolsCapability {}

/// `tools/list` result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolsListResult {
    /// Available tools
    pub tools: Vec<ToolSchema>,
}

/// One tool as advertised by `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    pub input_schema: InputSchema,
}

/// JSON Schema-like description of a tool's arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSchema {
    /// Always "object"
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    /// Parameters in declaration order
    #[serde(serialize_with = "ordered_map")]
    pub properties: Vec<(String, PropertySchema)>,
    /// Names of the required parameters, in declaration order
    pub required: Vec<String>,
}

/// Schema of a single parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: &'static str,
    /// Parameter description
    pub description: String,
}

fn ordered_map<S: Serializer>(
    entries: &[(String, PropertySchema)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(name, schema)| (name, schema)))
}

/// `tools/call` result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCallResult {
    /// Content items, a single text item for every tool
    pub content: Vec<ContentItem>,
}

/// A content item of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// Content type
    #[serde(rename = "type")]
    pub content_type: &'static str,
    /// Text payload
    pub text: String,
}

impl ToolCallResult {
    /// Result holding a single text item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                content_type: "text",
                text: text.into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let message =
            JsonRpcMessage::parse(br#"{"jsonrpc":"2.0","id":"abc","method":"ping"}"#).unwrap();
        assert_eq!(message.id.as_deref().map(RawValue::get), Some(r#""abc""#));
        assert_eq!(message.method(), "ping");
        assert!(!message.is_notification());
        assert!(message.params.is_none());
    }

    #[test]
    fn test_null_id_is_notification() {
        let message =
            JsonRpcMessage::parse(br#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#).unwrap();
        assert!(message.is_notification());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(JsonRpcMessage::parse(b"not json").is_err());
        assert!(JsonRpcMessage::parse(b"[1, 2, 3]").is_err());
        assert!(JsonRpcMessage::parse(b"[]").is_err());
        assert!(JsonRpcMessage::parse(b"\xff\xfe").is_err());
    }

    #[test]
    fn test_params_shape_is_checked_on_demand() {
        let message =
            JsonRpcMessage::parse(br#"{"id":1,"method":"tools/call","params":[1]}"#).unwrap();
        assert_eq!(message.params, Some(json!([1])));
        let err = message.params_object().unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidParams);

        let message = JsonRpcMessage::parse(br#"{"method":"ping","params":null}"#).unwrap();
        assert!(message.params_object().unwrap().is_empty());
    }

    #[test]
    fn test_large_integer_id_kept_verbatim() {
        let message =
            JsonRpcMessage::parse(br#"{"id":123456789012345678901234567890,"method":"ping"}"#)
                .unwrap();
        let response = JsonRpcResponse::success(message.id.unwrap(), json!({}));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"jsonrpc":"2.0","id":123456789012345678901234567890,"result":{}}"#
        );
    }

    #[test]
    fn test_missing_method_is_empty() {
        let message = JsonRpcMessage::parse(br#"{"id":7}"#).unwrap();
        assert_eq!(message.method(), "");
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let id = RawValue::from_string("1".to_string()).unwrap();
        let ok = JsonRpcResponse::success(id, json!({}));
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"jsonrpc":"2.0","id":1,"result":{}}"#
        );

        let err = JsonRpcResponse::failure(None, ErrorCode::ParseError, "Invalid JSON request");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"jsonrpc":"2.0","error":{"code":"parse_error","message":"Invalid JSON request"}}"#
        );
    }

    #[test]
    fn test_initialize_result_shape() {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            server_info: ServerInfo {
                name: "medium-stats".to_string(),
                version: "1.0.0".to_string(),
            },
            capabilities: ServerCapabilities::default(),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"protocolVersion":"2024-11-05","serverInfo":{"name":"medium-stats","version":"1.0.0"},"capabilities":{"tools":{}}}"#
        );
    }

    #[test]
    fn test_input_schema_keeps_declaration_order() {
        let property = |description: &str| PropertySchema {
            property_type: "string",
            description: description.to_string(),
        };
        let schema = InputSchema {
            schema_type: "object",
            properties: vec![
                ("zeta".to_string(), property("last letter")),
                ("alpha".to_string(), property("first letter")),
            ],
            required: vec!["zeta".to_string()],
        };
        let text = serde_json::to_string(&schema).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap()["required"],
            json!(["zeta"])
        );
    }

    #[test]
    fn test_tool_call_result_shape() {
        let value = serde_json::to_value(ToolCallResult::text("{}")).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "{}"}]}));
    }
}

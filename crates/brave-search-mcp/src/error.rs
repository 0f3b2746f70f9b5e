//! Error handling for the MCP server

use crate::jsonrpc::JsonRpcError;
use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that surface as JSON-RPC errors. Tool failures never do; they are
/// reported inside a successful `tools/call` result.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    Parse(serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tool registry error: {0}")]
    Registry(#[from] brave_search_core::CoreError),

    #[error("Connector error: {0}")]
    Connector(#[from] brave_search_connectors::ConnectorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            McpError::Parse(e) => JsonRpcError::parse_error().with_data(serde_json::json!({
                "message": e.to_string()
            })),
            McpError::InvalidRequest(msg) => {
                JsonRpcError::invalid_request().with_data(serde_json::json!({
                    "message": msg
                }))
            }
            McpError::InvalidParams(msg) => {
                JsonRpcError::invalid_params().with_data(serde_json::json!({
                    "message": msg
                }))
            }
            _ => JsonRpcError::internal_error().with_data(serde_json::json!({
                "message": self.to_string()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR};

    #[test]
    fn errors_map_to_jsonrpc_codes() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(McpError::Parse(parse).to_jsonrpc_error().code, PARSE_ERROR);
        assert_eq!(McpError::InvalidRequest("x".into()).to_jsonrpc_error().code, INVALID_REQUEST);

        let err = McpError::InvalidParams("Missing params for tools/call".into()).to_jsonrpc_error();
        assert_eq!(err.code, INVALID_PARAMS);
        assert_eq!(err.data.unwrap()["message"], "Missing params for tools/call");

        let dup = McpError::from(brave_search_core::CoreError::DuplicateTool("web_search".into()));
        assert!(matches!(dup, McpError::Registry(_)));
        assert_eq!(dup.to_jsonrpc_error().code, INTERNAL_ERROR);

        let io = McpError::Io(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert_eq!(io.to_jsonrpc_error().code, INTERNAL_ERROR);
    }
}

//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

use crate::domains::registrar::RegistrarError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The registrar call failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<RegistrarError> for ToolError {
    fn from(err: RegistrarError) -> Self {
        Self::ExecutionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("failed to serialize result: {}", err))
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(name) => McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
                None,
            ),
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::ExecutionFailed(msg) => {
                McpError::internal_error(format!("Tool execution failed: {}", msg), None)
            }
            ToolError::Internal(msg) => McpError::internal_error(msg, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_error_codes() {
        let not_found: McpError = ToolError::not_found("nope").into();
        assert_eq!(not_found.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(not_found.message.contains("nope"));

        let invalid: McpError = ToolError::invalid_arguments("missing field `sld`").into();
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);

        let failed: McpError = ToolError::from(RegistrarError::Status { status: 502 }).into();
        assert_eq!(failed.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(
            failed.message,
            "Tool execution failed: Registrar returned HTTP 502"
        );
    }
}

//! Tool Registry - dispatch by tool name and tool metadata.
//!
//! The MCP server routes calls through `ToolRouter`; the registry offers the
//! same dispatch for callers that hold a tool name and raw JSON arguments.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, Tool},
};
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::{
    DnsGetListTool, DnsSetCustomTool, DnsSetHostsTool, DomainsCheckTool, DomainsCreateTool,
    DomainsGetContactsTool, DomainsGetInfoTool, DomainsGetRegistrarLockTool,
    DomainsGetTldListTool, DomainsListTool, DomainsReactivateTool, DomainsRenewTool,
    DomainsSetContactsTool, DomainsSetRegistrarLockTool,
};
use super::{ToolContext, ToolError};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    ctx: ToolContext,
}

impl ToolRegistry {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            DomainsListTool::NAME,
            DomainsCheckTool::NAME,
            DomainsGetInfoTool::NAME,
            DomainsGetContactsTool::NAME,
            DomainsSetContactsTool::NAME,
            DomainsCreateTool::NAME,
            DomainsRenewTool::NAME,
            DomainsReactivateTool::NAME,
            DomainsGetRegistrarLockTool::NAME,
            DomainsSetRegistrarLockTool::NAME,
            DomainsGetTldListTool::NAME,
            DnsGetListTool::NAME,
            DnsSetCustomTool::NAME,
            DnsSetHostsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            DomainsListTool::to_tool(),
            DomainsCheckTool::to_tool(),
            DomainsGetInfoTool::to_tool(),
            DomainsGetContactsTool::to_tool(),
            DomainsSetContactsTool::to_tool(),
            DomainsCreateTool::to_tool(),
            DomainsRenewTool::to_tool(),
            DomainsReactivateTool::to_tool(),
            DomainsGetRegistrarLockTool::to_tool(),
            DomainsSetRegistrarLockTool::to_tool(),
            DomainsGetTldListTool::to_tool(),
            DnsGetListTool::to_tool(),
            DnsSetCustomTool::to_tool(),
            DnsSetHostsTool::to_tool(),
        ]
    }

    /// Call a tool by name.
    ///
    /// `arguments` must be a JSON object or null. Unknown names yield a
    /// `METHOD_NOT_FOUND` error, bad arguments `invalid_params`, and registrar
    /// failures `internal_error`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, McpError> {
        let args = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {}",
                    other
                ))
                .into());
            }
        };

        info!("Dispatching tool call: {}", name);
        let ctx = self.ctx.clone();

        match name {
            DomainsListTool::NAME => DomainsListTool::call(args, ctx).await,
            DomainsCheckTool::NAME => DomainsCheckTool::call(args, ctx).await,
            DomainsGetInfoTool::NAME => DomainsGetInfoTool::call(args, ctx).await,
            DomainsGetContactsTool::NAME => DomainsGetContactsTool::call(args, ctx).await,
            DomainsSetContactsTool::NAME => DomainsSetContactsTool::call(args, ctx).await,
            DomainsCreateTool::NAME => DomainsCreateTool::call(args, ctx).await,
            DomainsRenewTool::NAME => DomainsRenewTool::call(args, ctx).await,
            DomainsReactivateTool::NAME => DomainsReactivateTool::call(args, ctx).await,
            DomainsGetRegistrarLockTool::NAME => DomainsGetRegistrarLockTool::call(args, ctx).await,
            DomainsSetRegistrarLockTool::NAME => DomainsSetRegistrarLockTool::call(args, ctx).await,
            DomainsGetTldListTool::NAME => DomainsGetTldListTool::call(args, ctx).await,
            DnsGetListTool::NAME => DnsGetListTool::call(args, ctx).await,
            DnsSetCustomTool::NAME => DnsSetCustomTool::call(args, ctx).await,
            DnsSetHostsTool::NAME => DnsSetHostsTool::call(args, ctx).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).into())
            }
        }
    }
}

//! MCP Server implementation.
//!
//! The server exposes the registrar tools built in `domains/tools/router.rs`.
//! Adding a tool does not require changes here.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ToolContext, ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Namecheap registrar tools. Manage domains (list, check availability, \
    register, renew, reactivate, contacts, registrar lock), DNS (nameservers and host records) \
    and browse supported TLDs. Registrar responses are returned as JSON converted from the \
    Namecheap XML API; check the Status field and Errors block for registrar-level failures.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Registrar client and TLD cache shared by every tool.
    context: ToolContext,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server, building the registrar client from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let context = ToolContext::from_config(&config)?;
        Ok(Self::with_context(config, context))
    }

    /// Create a server around an existing tool context.
    pub fn with_context(config: Config, context: ToolContext) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(context.clone()),
            config: Arc::new(config),
            context,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Registry sharing this server's client and cache.
    pub fn registry(&self) -> ToolRegistry {
        ToolRegistry::new(self.context.clone())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(&request.name) {
            warn!("Unknown tool requested: {}", request.name);
            return Err(ToolError::not_found(request.name.to_string()).into());
        }
        let call = ToolCallContext::new(self, request, context);
        self.tool_router.call(call).await
    }
}

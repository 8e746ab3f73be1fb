//! `namecheap_domains_check` - availability check for one or more names.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, require_non_empty, tool_definition};
use crate::domains::tools::{ToolContext, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DomainsCheckParams {
    /// Domain names to check, e.g. ["example.com", "example.net"]
    pub domains: Vec<String>,
}

/// Checks whether domains are available for registration.
pub struct DomainsCheckTool;

impl DomainsCheckTool {
    pub const NAME: &'static str = "namecheap_domains_check";

    pub const DESCRIPTION: &'static str =
        "Check whether one or more domain names are available for registration.";

    #[instrument(skip_all, fields(count = params.domains.len()))]
    pub async fn execute(
        params: &DomainsCheckParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("domains", &params.domains)?;
        info!("Checking availability of {}", params.domains.join(", "));
        let response = ctx.client.domains_check(&params.domains).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainsCheckParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainsCheckParams = parse_params(args)?;
        Ok(Self::execute(&params, &ctx).await?)
    }

    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move { Self::call(args, ctx).await }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_must_be_an_array() {
        let mut args = JsonObject::new();
        args.insert("domains".into(), serde_json::json!("example.com"));
        assert!(parse_params::<DomainsCheckParams>(args).is_err());
    }

    #[test]
    fn test_schema_requires_domains() {
        let tool = DomainsCheckTool::to_tool();
        let required = tool.input_schema.get("required").cloned().unwrap_or_default();
        assert_eq!(required, serde_json::json!(["domains"]));
    }
}

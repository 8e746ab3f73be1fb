//! `namecheap_domains_getinfo` - details for a single domain.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::tools::{ToolContext, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainsGetInfoParams {
    /// Domain name to look up
    pub domain: String,

    /// Hosted domain name, for domains hosted with Namecheap
    #[serde(default)]
    pub host_name: Option<String>,
}

pub struct DomainsGetInfoTool;

impl DomainsGetInfoTool {
    pub const NAME: &'static str = "namecheap_domains_getinfo";

    pub const DESCRIPTION: &'static str =
        "Get detailed information about a domain: status, dates, DNS and WhoisGuard settings.";

    #[instrument(skip_all, fields(domain = %params.domain))]
    pub async fn execute(
        params: &DomainsGetInfoParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Getting info for {}", params.domain);
        let response = ctx
            .client
            .domains_get_info(&params.domain, params.host_name.as_deref())
            .await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainsGetInfoParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainsGetInfoParams = parse_params(args)?;
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

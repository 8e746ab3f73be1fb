//! `namecheap_domains_getcontacts` - contact records for a domain.

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
pub struct DomainsGetContactsParams {
    /// Domain whose contacts to fetch
    pub domain_name: String,
}

pub struct DomainsGetContactsTool;

impl DomainsGetContactsTool {
    pub const NAME: &'static str = "namecheap_domains_getcontacts";

    pub const DESCRIPTION: &'static str =
        "Get the registrant, tech, admin and billing contacts of a domain.";

    #[instrument(skip_all, fields(domain = %params.domain_name))]
    pub async fn execute(
        params: &DomainsGetContactsParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Getting contacts for {}", params.domain_name);
        let response = ctx.client.domains_get_contacts(&params.domain_name).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainsGetContactsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainsGetContactsParams = parse_params(args)?;
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

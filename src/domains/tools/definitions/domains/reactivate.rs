//! `namecheap_domains_reactivate`

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::registrar::types::DomainReactivateParams;
use crate::domains::tools::{ToolContext, ToolError};

pub struct DomainsReactivateTool;

impl DomainsReactivateTool {
    pub const NAME: &'static str = "namecheap_domains_reactivate";

    pub const DESCRIPTION: &'static str =
        "Reactivate an expired domain. This charges the account.";

    #[instrument(skip_all, fields(domain = %params.domain_name))]
    pub async fn execute(
        params: &DomainReactivateParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Reactivating {}", params.domain_name);
        let response = ctx.client.domains_reactivate(params).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainReactivateParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainReactivateParams = parse_params(args)?;
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

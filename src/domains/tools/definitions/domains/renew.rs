//! `namecheap_domains_renew`

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::registrar::types::DomainRenewParams;
use crate::domains::tools::{ToolContext, ToolError};

pub struct DomainsRenewTool;

impl DomainsRenewTool {
    pub const NAME: &'static str = "namecheap_domains_renew";

    pub const DESCRIPTION: &'static str =
        "Renew a domain for the given number of years. This charges the account.";

    #[instrument(skip_all, fields(domain = %params.domain_name, years = params.years))]
    pub async fn execute(
        params: &DomainRenewParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        if params.years == 0 {
            return Err(ToolError::invalid_arguments("`years` must be at least 1"));
        }
        info!("Renewing {} for {} year(s)", params.domain_name, params.years);
        let response = ctx.client.domains_renew(params).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainRenewParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainRenewParams = parse_params(args)?;
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

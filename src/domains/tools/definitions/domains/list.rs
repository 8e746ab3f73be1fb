//! `namecheap_domains_list` - list domains in the account.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::registrar::types::DomainListParams;
use crate::domains::tools::{ToolContext, ToolError};

/// Lists domains with optional filtering, paging and sorting.
pub struct DomainsListTool;

impl DomainsListTool {
    pub const NAME: &'static str = "namecheap_domains_list";

    pub const DESCRIPTION: &'static str = "List domains in the Namecheap account. Supports filtering by list type (ALL, EXPIRING, EXPIRED) and search term, paging, and sorting.";

    #[instrument(skip_all)]
    pub async fn execute(
        params: &DomainListParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            "Listing domains (type {:?}, page {:?})",
            params.list_type, params.page
        );
        let response = ctx.client.domains_list(params).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainListParams = parse_params(args)?;
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

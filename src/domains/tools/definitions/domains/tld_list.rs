//! `namecheap_domains_gettldlist` - query the cached TLD catalogue.

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
use crate::domains::registrar::TldQuery;
use crate::domains::tools::{ToolContext, ToolError};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTldListParams {
    #[serde(flatten)]
    pub query: TldQuery,

    /// Refetch the TLD list from Namecheap before answering
    #[serde(default)]
    pub refresh: bool,
}

/// Answers TLD queries from the in-memory cache.
pub struct DomainsGetTldListTool;

impl DomainsGetTldListTool {
    pub const NAME: &'static str = "namecheap_domains_gettldlist";

    pub const DESCRIPTION: &'static str = "List the TLDs Namecheap supports, with registration limits and capabilities. Filter by name substring, category or API registerability; results are paginated and can be sorted by name or popularity. The list is cached for 24 hours unless refresh is set.";

    #[instrument(skip_all, fields(refresh = params.refresh))]
    pub async fn execute(
        params: &GetTldListParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        if params.refresh {
            info!("Forcing TLD list refresh");
            ctx.tld_cache.refresh().await?;
        }
        let page = ctx.tld_cache.get_tlds(&params.query).await?;
        info!(
            "TLD query matched {} entries (page {}/{})",
            page.total_count, page.page, page.total_pages
        );
        json_result(&page)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<GetTldListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: GetTldListParams = parse_params(args)?;
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

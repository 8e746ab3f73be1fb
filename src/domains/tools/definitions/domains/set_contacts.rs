//! `namecheap_domains_setcontacts` - update contact records.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::registrar::types::DomainSetContactsParams;
use crate::domains::tools::{ToolContext, ToolError};

pub struct DomainsSetContactsTool;

impl DomainsSetContactsTool {
    pub const NAME: &'static str = "namecheap_domains_setcontacts";

    pub const DESCRIPTION: &'static str = "Update the contacts of a domain. Only the contact blocks and fields provided are sent.";

    #[instrument(skip_all, fields(domain = %params.domain_name))]
    pub async fn execute(
        params: &DomainSetContactsParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Setting contacts for {}", params.domain_name);
        let response = ctx.client.domains_set_contacts(params).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainSetContactsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainSetContactsParams = parse_params(args)?;
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

//! `namecheap_dns_getlist` - nameservers currently set on a domain.

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
pub struct DnsGetListParams {
    /// Second-level domain, e.g. "example" for example.com
    pub sld: String,

    /// Top-level domain, e.g. "com" for example.com
    pub tld: String,

    /// Full domain name; accepted for convenience but not sent
    #[serde(default)]
    pub domain: Option<String>,
}

pub struct DnsGetListTool;

impl DnsGetListTool {
    pub const NAME: &'static str = "namecheap_dns_getlist";

    pub const DESCRIPTION: &'static str =
        "Get the list of DNS servers (nameservers) set for a domain.";

    #[instrument(skip_all, fields(sld = %params.sld, tld = %params.tld))]
    pub async fn execute(
        params: &DnsGetListParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Getting DNS servers for {}.{}", params.sld, params.tld);
        let response = ctx.client.dns_get_list(&params.sld, &params.tld).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DnsGetListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DnsGetListParams = parse_params(args)?;
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

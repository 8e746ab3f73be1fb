//! `namecheap_dns_setcustom` - point a domain at custom nameservers.

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
pub struct DnsSetCustomParams {
    /// Second-level domain
    pub sld: String,

    /// Top-level domain
    pub tld: String,

    /// Nameserver host names, in order
    pub nameservers: Vec<String>,
}

pub struct DnsSetCustomTool;

impl DnsSetCustomTool {
    pub const NAME: &'static str = "namecheap_dns_setcustom";

    pub const DESCRIPTION: &'static str = "Set custom nameservers for a domain, replacing Namecheap DNS.";

    #[instrument(skip_all, fields(sld = %params.sld, tld = %params.tld))]
    pub async fn execute(
        params: &DnsSetCustomParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("nameservers", &params.nameservers)?;
        info!(
            "Setting {} custom nameserver(s) for {}.{}",
            params.nameservers.len(),
            params.sld,
            params.tld
        );
        let response = ctx
            .client
            .dns_set_custom(&params.sld, &params.tld, &params.nameservers)
            .await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DnsSetCustomParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DnsSetCustomParams = parse_params(args)?;
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

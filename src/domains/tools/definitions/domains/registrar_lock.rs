//! Registrar lock tools: `namecheap_domains_getregistrarlock` and
//! `namecheap_domains_setregistrarlock`.

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
use crate::domains::registrar::types::LockAction;
use crate::domains::tools::{ToolContext, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRegistrarLockParams {
    /// Domain to inspect
    pub domain_name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetRegistrarLockParams {
    /// Domain to lock or unlock
    pub domain_name: String,

    /// LOCK or UNLOCK
    pub lock_action: LockAction,
}

/// Reads the transfer lock status.
pub struct DomainsGetRegistrarLockTool;

impl DomainsGetRegistrarLockTool {
    pub const NAME: &'static str = "namecheap_domains_getregistrarlock";

    pub const DESCRIPTION: &'static str =
        "Get the registrar (transfer) lock status of a domain.";

    #[instrument(skip_all, fields(domain = %params.domain_name))]
    pub async fn execute(
        params: &GetRegistrarLockParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!("Getting registrar lock for {}", params.domain_name);
        let response = ctx
            .client
            .domains_get_registrar_lock(&params.domain_name)
            .await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<GetRegistrarLockParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: GetRegistrarLockParams = parse_params(args)?;
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

/// Locks or unlocks a domain for transfer.
pub struct DomainsSetRegistrarLockTool;

impl DomainsSetRegistrarLockTool {
    pub const NAME: &'static str = "namecheap_domains_setregistrarlock";

    pub const DESCRIPTION: &'static str =
        "Lock or unlock a domain for transfer (lockAction: LOCK or UNLOCK).";

    #[instrument(skip_all, fields(domain = %params.domain_name))]
    pub async fn execute(
        params: &SetRegistrarLockParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            "Setting registrar lock for {} to {}",
            params.domain_name,
            params.lock_action.as_str()
        );
        let response = ctx
            .client
            .domains_set_registrar_lock(&params.domain_name, params.lock_action)
            .await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<SetRegistrarLockParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: SetRegistrarLockParams = parse_params(args)?;
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
    fn test_lock_action_is_validated() {
        let serde_json::Value::Object(args) =
            serde_json::json!({"domainName": "example.com", "lockAction": "FREEZE"})
        else {
            unreachable!()
        };
        assert!(parse_params::<SetRegistrarLockParams>(args).is_err());

        let serde_json::Value::Object(args) =
            serde_json::json!({"domainName": "example.com", "lockAction": "UNLOCK"})
        else {
            unreachable!()
        };
        let params: SetRegistrarLockParams = parse_params(args).unwrap();
        assert_eq!(params.lock_action, LockAction::Unlock);
    }
}

//! `namecheap_domains_create` - register a new domain.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use super::super::common::{json_result, parse_params, tool_definition};
use crate::domains::registrar::types::DomainCreateParams;
use crate::domains::tools::{ToolContext, ToolError};

/// Registers a domain. This is a billable operation.
pub struct DomainsCreateTool;

impl DomainsCreateTool {
    pub const NAME: &'static str = "namecheap_domains_create";

    pub const DESCRIPTION: &'static str = "Register a new domain. Requires the registration period in years and a registrant contact; tech, admin, aux billing and billing contacts are optional. This charges the account.";

    #[instrument(skip_all, fields(domain = %params.domain_name, years = params.years))]
    pub async fn execute(
        params: &DomainCreateParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        if params.years == 0 {
            return Err(ToolError::invalid_arguments("`years` must be at least 1"));
        }
        let missing = params.registrant.missing_registrant_fields();
        if !missing.is_empty() {
            return Err(ToolError::invalid_arguments(format!(
                "`registrant` is missing required fields: {}",
                missing.join(", ")
            )));
        }
        info!(
            "Registering {} for {} year(s)",
            params.domain_name, params.years
        );
        let response = ctx.client.domains_create(params).await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DomainCreateParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DomainCreateParams = parse_params(args)?;
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
    fn test_registrant_is_required() {
        let args = serde_json::json!({"domainName": "example.com", "years": 1});
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        let err = parse_params::<DomainCreateParams>(args).unwrap_err();
        assert!(err.to_string().contains("registrant"));
    }

    #[test]
    fn test_whoisguard_flags_are_yes_no() {
        let args = serde_json::json!({
            "domainName": "example.com",
            "years": 2,
            "registrant": {"firstName": "Ada"},
            "wgEnabled": "maybe"
        });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        assert!(parse_params::<DomainCreateParams>(args).is_err());
    }
}

//! `namecheap_dns_sethosts` - replace the host records of a domain.
//!
//! The registrar replaces the whole record set, so `hosts` must list every
//! record the domain should keep.

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
use crate::domains::registrar::types::DnsHost;
use crate::domains::tools::{ToolContext, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DnsSetHostsParams {
    /// Second-level domain
    pub sld: String,

    /// Top-level domain
    pub tld: String,

    /// Complete list of host records
    pub hosts: Vec<DnsHost>,
}

pub struct DnsSetHostsTool;

impl DnsSetHostsTool {
    pub const NAME: &'static str = "namecheap_dns_sethosts";

    pub const DESCRIPTION: &'static str = "Set the DNS host records (A, AAAA, CNAME, MX, TXT, NS, SRV, CAA) of a domain. Existing records not included in the list are removed.";

    #[instrument(skip_all, fields(sld = %params.sld, tld = %params.tld, hosts = params.hosts.len()))]
    pub async fn execute(
        params: &DnsSetHostsParams,
        ctx: &ToolContext,
    ) -> Result<CallToolResult, ToolError> {
        require_non_empty("hosts", &params.hosts)?;
        info!(
            "Setting {} host record(s) for {}.{}",
            params.hosts.len(),
            params.sld,
            params.tld
        );
        let response = ctx
            .client
            .dns_set_hosts(&params.sld, &params.tld, &params.hosts)
            .await?;
        json_result(&response)
    }

    pub fn to_tool() -> Tool {
        tool_definition::<DnsSetHostsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub async fn call(args: JsonObject, ctx: ToolContext) -> Result<CallToolResult, McpError> {
        let params: DnsSetHostsParams = parse_params(args)?;
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
    use crate::domains::registrar::types::DnsRecordType;

    fn args(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_hosts_missing_is_invalid() {
        let err = parse_params::<DnsSetHostsParams>(args(serde_json::json!({
            "sld": "example",
            "tld": "com"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("hosts")));
    }

    #[test]
    fn test_hosts_not_an_array_is_invalid() {
        let result = parse_params::<DnsSetHostsParams>(args(serde_json::json!({
            "sld": "example",
            "tld": "com",
            "hosts": "A 192.0.2.1"
        })));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_hosts_parse() {
        let params: DnsSetHostsParams = parse_params(args(serde_json::json!({
            "sld": "example",
            "tld": "com",
            "hosts": [
                {"hostname": "@", "recordType": "MX", "address": "mail.example.com", "mxPriority": 10},
                {"hostname": "www", "recordType": "CNAME", "address": "example.com", "ttl": 300}
            ]
        })))
        .unwrap();
        assert_eq!(params.hosts.len(), 2);
        assert_eq!(params.hosts[0].record_type, DnsRecordType::Mx);
        assert_eq!(params.hosts[1].ttl, Some(300));
    }
}

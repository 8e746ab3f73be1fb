//! Tool Router - builds the rmcp ToolRouter for the MCP server.
//!
//! Each tool knows how to create its own route; this module only lists them.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolContext;
use super::definitions::{
    DnsGetListTool, DnsSetCustomTool, DnsSetHostsTool, DomainsCheckTool, DomainsCreateTool,
    DomainsGetContactsTool, DomainsGetInfoTool, DomainsGetRegistrarLockTool,
    DomainsGetTldListTool, DomainsListTool, DomainsReactivateTool, DomainsRenewTool,
    DomainsSetContactsTool, DomainsSetRegistrarLockTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(DomainsListTool::create_route(ctx.clone()))
        .with_route(DomainsCheckTool::create_route(ctx.clone()))
        .with_route(DomainsGetInfoTool::create_route(ctx.clone()))
        .with_route(DomainsGetContactsTool::create_route(ctx.clone()))
        .with_route(DomainsSetContactsTool::create_route(ctx.clone()))
        .with_route(DomainsCreateTool::create_route(ctx.clone()))
        .with_route(DomainsRenewTool::create_route(ctx.clone()))
        .with_route(DomainsReactivateTool::create_route(ctx.clone()))
        .with_route(DomainsGetRegistrarLockTool::create_route(ctx.clone()))
        .with_route(DomainsSetRegistrarLockTool::create_route(ctx.clone()))
        .with_route(DomainsGetTldListTool::create_route(ctx.clone()))
        .with_route(DnsGetListTool::create_route(ctx.clone()))
        .with_route(DnsSetCustomTool::create_route(ctx.clone()))
        .with_route(DnsSetHostsTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::Config;

    struct TestServer {}

    fn test_context() -> ToolContext {
        ToolContext::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 14);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"namecheap_domains_list"));
        assert!(names.contains(&"namecheap_domains_check"));
        assert!(names.contains(&"namecheap_domains_gettldlist"));
        assert!(names.contains(&"namecheap_dns_sethosts"));
        assert!(router.has_route("namecheap_domains_setregistrarlock"));
        assert!(!router.has_route("namecheap_domains_transfer"));
    }

    #[test]
    fn test_registry_matches_router() {
        let ctx = test_context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}

//! Tool definitions module.
//!
//! One file per tool (related tools may share a file). Each tool exposes
//! `NAME`, `DESCRIPTION`, `execute()`, `to_tool()`, `call()` and
//! `create_route()`.

pub mod common;
pub mod dns;
pub mod domains;

pub use dns::{DnsGetListTool, DnsSetCustomTool, DnsSetHostsTool};
pub use domains::{
    DomainsCheckTool, DomainsCreateTool, DomainsGetContactsTool, DomainsGetInfoTool,
    DomainsGetRegistrarLockTool, DomainsGetTldListTool, DomainsListTool, DomainsReactivateTool,
    DomainsRenewTool, DomainsSetContactsTool, DomainsSetRegistrarLockTool,
};

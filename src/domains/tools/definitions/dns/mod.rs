//! DNS tools.

pub mod get_list;
pub mod set_custom;
pub mod set_hosts;

pub use get_list::DnsGetListTool;
pub use set_custom::DnsSetCustomTool;
pub use set_hosts::DnsSetHostsTool;

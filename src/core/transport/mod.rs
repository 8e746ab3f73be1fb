//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the usual MCP mode (feature `stdio`, default)
//! - **TCP**: line-delimited JSON-RPC over a TCP socket (feature `tcp`)
//!
//! Either transport hands every connection a clone of the same
//! [`McpServer`](crate::core::McpServer), so the registrar client and TLD
//! cache are shared across connections.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

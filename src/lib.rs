//! Namecheap MCP Server Library
//!
//! Exposes the Namecheap registrar API to Model Context Protocol clients as
//! a set of tools: domain listing, availability checks, registration,
//! renewal, contacts, registrar lock, DNS nameservers and host records, and
//! a cached TLD catalogue.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **registrar**: HTTP client, XML decoding, TLD cache
//!   - **tools**: MCP tool definitions, router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use namecheap_mcp_server::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, TransportService};

//! Tools domain module.
//!
//! Every registrar operation is exposed as an MCP tool.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - ToolRouter builder used by the MCP server
//! - `registry.rs` - Tool metadata and dispatch by name
//! - `context.rs` - Registrar client and TLD cache shared by the tools
//! - `error.rs` - Tool error type and its mapping onto MCP errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in `definitions/domains/` or `definitions/dns/`
//! 2. Define params, `execute()`, `to_tool()`, `call()` and `create_route()`
//! 3. Export it from the definitions module
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

//! Business logic, organized by bounded context.
//!
//! - **registrar**: Namecheap API client, response decoding and TLD cache
//! - **tools**: MCP tools built on top of the registrar client

pub mod registrar;
pub mod tools;

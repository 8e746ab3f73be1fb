//! Namecheap registrar domain.
//!
//! - `commands.rs` - Command names and query-parameter builders
//! - `client.rs` - HTTP client that executes commands
//! - `xml.rs` - Response decoding
//! - `tld.rs` / `tld_cache.rs` - TLD metadata and its in-memory cache
//! - `types.rs` - Typed command parameters

pub mod client;
pub mod commands;
mod error;
pub mod tld;
pub mod tld_cache;
pub mod types;
pub mod xml;

pub use client::{PRODUCTION_URL, RegistrarClient, SANDBOX_URL};
pub use commands::RegistrarRequest;
pub use error::{RegistrarError, RegistrarResult};
pub use tld::TldInfo;
pub use tld_cache::{TldCache, TldPage, TldQuery, TldSortField, TldSource};
pub use xml::{XmlElement, XmlError, decode_response};

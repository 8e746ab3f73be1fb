//! Error types and handling for the MCP server.
//!
//! This module defines the top-level error type. Domain layers keep their own
//! error enums and convert into this one at the boundary.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the registrar client.
    #[error("Registrar error: {0}")]
    Registrar(#[from] crate::domains::registrar::RegistrarError),

    /// Transport setup or runtime failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

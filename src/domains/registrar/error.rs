//! Registrar client error types.

use thiserror::Error;

use super::xml::XmlError;

/// Result type for registrar operations.
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Errors raised while talking to the registrar API.
///
/// Business-level failures reported inside a successful response
/// (`Status="ERROR"` with an `<Errors>` block) are not represented here;
/// they are relayed to the caller as part of the decoded body.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Connection, timeout or body-read failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The registrar answered with a non-success HTTP status.
    #[error("Registrar returned HTTP {status}")]
    Status { status: u16 },

    /// A response that must be structured could not be parsed.
    #[error("Invalid registrar response: {0}")]
    Xml(#[from] XmlError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

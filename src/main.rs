//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, and serves the registrar tools
//! over the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use namecheap_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Fails before any transport starts when credentials are missing
    let config = Config::from_env().context("failed to load configuration")?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Registrar configured for user {} ({})",
        config.registrar.api_user,
        if config.registrar.use_sandbox {
            "sandbox"
        } else {
            "production"
        }
    );

    let server = McpServer::new(config.clone()).context("failed to initialize server")?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so they never interleave with STDIO protocol traffic.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

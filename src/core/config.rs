//! Configuration management for the MCP server.
//!
//! Configuration is read from environment variables (a `.env` file is
//! honoured). Registrar credentials are required; everything else has a
//! default.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TLD_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Namecheap API access.
    pub registrar: RegistrarConfig,

    /// TLD cache settings.
    pub cache: CacheConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Namecheap API credentials and endpoint selection.
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// API user, also sent as `UserName`.
    pub api_user: String,

    pub api_key: String,

    /// Client IP whitelisted in the Namecheap account.
    pub client_ip: String,

    /// Use the sandbox endpoint instead of production.
    pub use_sandbox: bool,

    /// Explicit endpoint, taking precedence over `use_sandbox`.
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for RegistrarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrarConfig")
            .field("api_user", &self.api_user)
            .field("api_key", &"[REDACTED]")
            .field("client_ip", &self.client_ip)
            .field("use_sandbox", &self.use_sandbox)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// TLD cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of the TLD snapshot in seconds.
    pub tld_ttl_secs: u64,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            api_user: String::new(),
            api_key: String::new(),
            client_ip: String::new(),
            use_sandbox: false,
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tld_ttl_secs: DEFAULT_TLD_CACHE_TTL_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "namecheap-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            registrar: RegistrarConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `NAMECHEAP_API_KEY`, `NAMECHEAP_API_USER` or
    /// `NAMECHEAP_CLIENT_IP` is missing or empty, or when a numeric or
    /// boolean variable does not parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.registrar.api_key = required_var("NAMECHEAP_API_KEY")?;
        config.registrar.api_user = required_var("NAMECHEAP_API_USER")?;
        config.registrar.client_ip = required_var("NAMECHEAP_CLIENT_IP")?;

        if let Some(sandbox) = parsed_var::<bool>("NAMECHEAP_USE_SANDBOX")? {
            config.registrar.use_sandbox = sandbox;
        }

        if let Ok(url) = std::env::var("NAMECHEAP_API_URL") {
            if !url.trim().is_empty() {
                config.registrar.api_url = Some(url);
            }
        }

        if let Some(timeout) = parsed_var::<u64>("NAMECHEAP_TIMEOUT_SECS")? {
            config.registrar.timeout_secs = timeout;
        }

        if let Some(ttl) = parsed_var::<u64>("NAMECHEAP_TLD_CACHE_TTL_SECS")? {
            config.cache.tld_ttl_secs = ttl;
        }

        Ok(config)
    }
}

fn required_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!(
            "{} environment variable is required",
            key
        ))),
    }
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .to_lowercase()
            .parse()
            .map(Some)
            .map_err(|_| Error::config(format!("{} has an invalid value: {}", key, value))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_API_USER",
        "NAMECHEAP_CLIENT_IP",
        "NAMECHEAP_USE_SANDBOX",
        "NAMECHEAP_API_URL",
        "NAMECHEAP_TIMEOUT_SECS",
        "NAMECHEAP_TLD_CACHE_TTL_SECS",
    ];

    fn reset_env() {
        unsafe {
            for var in VARS {
                std::env::remove_var(var);
            }
        }
    }

    fn set_credentials() {
        unsafe {
            std::env::set_var("NAMECHEAP_API_KEY", "test_key_12345");
            std::env::set_var("NAMECHEAP_API_USER", "alice");
            std::env::set_var("NAMECHEAP_CLIENT_IP", "203.0.113.7");
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        reset_env();
        set_credentials();

        let config = Config::from_env().unwrap();
        assert_eq!(config.registrar.api_key, "test_key_12345");
        assert_eq!(config.registrar.api_user, "alice");
        assert_eq!(config.registrar.client_ip, "203.0.113.7");
        assert!(!config.registrar.use_sandbox);
        assert_eq!(config.registrar.timeout_secs, 30);
        assert_eq!(config.cache.tld_ttl_secs, 86_400);

        reset_env();
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        reset_env();
        set_credentials();
        unsafe {
            std::env::remove_var("NAMECHEAP_CLIENT_IP");
        }

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("NAMECHEAP_CLIENT_IP"));

        reset_env();
    }

    #[test]
    fn test_empty_credential_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        reset_env();
        set_credentials();
        unsafe {
            std::env::set_var("NAMECHEAP_API_KEY", "  ");
        }

        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        reset_env();
    }

    #[test]
    fn test_optional_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        reset_env();
        set_credentials();
        unsafe {
            std::env::set_var("NAMECHEAP_USE_SANDBOX", "TRUE");
            std::env::set_var("NAMECHEAP_API_URL", "http://127.0.0.1:8080/xml.response");
            std::env::set_var("NAMECHEAP_TIMEOUT_SECS", "5");
            std::env::set_var("NAMECHEAP_TLD_CACHE_TTL_SECS", "60");
        }

        let config = Config::from_env().unwrap();
        assert!(config.registrar.use_sandbox);
        assert_eq!(
            config.registrar.api_url.as_deref(),
            Some("http://127.0.0.1:8080/xml.response")
        );
        assert_eq!(config.registrar.timeout_secs, 5);
        assert_eq!(config.cache.tld_ttl_secs, 60);

        reset_env();
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        reset_env();
        set_credentials();
        unsafe {
            std::env::set_var("NAMECHEAP_TIMEOUT_SECS", "soon");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("NAMECHEAP_TIMEOUT_SECS"));

        reset_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let registrar = RegistrarConfig {
            api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", registrar);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}

//! Shared state handed to every tool.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::Config;
use crate::domains::registrar::{RegistrarClient, RegistrarResult, TldCache};

/// Registrar client and TLD cache, shared by all tool invocations.
///
/// Cloning is cheap; both members are reference counted.
#[derive(Clone)]
pub struct ToolContext {
    pub client: Arc<RegistrarClient>,
    pub tld_cache: Arc<TldCache>,
}

impl ToolContext {
    /// Build the client and a cache backed by it from configuration.
    pub fn from_config(config: &Config) -> RegistrarResult<Self> {
        let client = RegistrarClient::new(&config.registrar)?;
        Ok(Self::new(
            client,
            Duration::from_secs(config.cache.tld_ttl_secs),
        ))
    }

    /// Wrap an existing client; the cache fetches through it.
    pub fn new(client: RegistrarClient, tld_cache_ttl: Duration) -> Self {
        let client = Arc::new(client);
        let tld_cache = Arc::new(TldCache::with_ttl(client.clone(), tld_cache_ttl));
        Self { client, tld_cache }
    }
}

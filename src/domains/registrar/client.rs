//! HTTP client for the Namecheap XML API.
//!
//! Every command is a single GET against the `xml.response` endpoint with the
//! account credentials attached as query parameters. Responses are decoded
//! into JSON without inspecting the registrar's own `Status` attribute.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use super::commands::{self, RegistrarRequest};
use super::error::{RegistrarError, RegistrarResult};
use super::tld::{TldInfo, parse_tld_list};
use super::tld_cache::TldSource;
use super::types::{
    DnsHost, DomainCreateParams, DomainListParams, DomainReactivateParams, DomainRenewParams,
    DomainSetContactsParams, LockAction,
};
use super::xml::{XmlElement, decode_response};
use crate::core::config::RegistrarConfig;

/// Sandbox endpoint.
pub const SANDBOX_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

/// Production endpoint.
pub const PRODUCTION_URL: &str = "https://api.namecheap.com/xml.response";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Namecheap API client.
#[derive(Clone)]
pub struct RegistrarClient {
    http: reqwest::Client,
    endpoint: String,
    api_user: String,
    api_key: String,
    client_ip: String,
}

impl std::fmt::Debug for RegistrarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrarClient")
            .field("endpoint", &self.endpoint)
            .field("api_user", &self.api_user)
            .field("api_key", &"[REDACTED]")
            .field("client_ip", &self.client_ip)
            .finish()
    }
}

impl RegistrarClient {
    /// Build a client from configuration.
    pub fn new(config: &RegistrarConfig) -> RegistrarResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RegistrarError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: Self::endpoint_for(config),
            api_user: config.api_user.clone(),
            api_key: config.api_key.clone(),
            client_ip: config.client_ip.clone(),
        })
    }

    /// Resolve the endpoint: explicit override, then sandbox/production.
    pub fn endpoint_for(config: &RegistrarConfig) -> String {
        match &config.api_url {
            Some(url) => url.clone(),
            None if config.use_sandbox => SANDBOX_URL.to_string(),
            None => PRODUCTION_URL.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a request and return the raw response body.
    #[instrument(skip(self, request), fields(command = request.command()))]
    pub async fn send(&self, request: &RegistrarRequest) -> RegistrarResult<String> {
        debug!("Sending registrar command {}", request.command());

        let mut query: Vec<(&str, &str)> = vec![
            ("ApiUser", self.api_user.as_str()),
            ("ApiKey", self.api_key.as_str()),
            ("UserName", self.api_user.as_str()),
            ("ClientIp", self.client_ip.as_str()),
            ("Command", request.command()),
        ];
        query.extend(
            request
                .params()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        let response = self.http.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistrarError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Execute a request and decode the body into JSON.
    pub async fn call(&self, request: &RegistrarRequest) -> RegistrarResult<Value> {
        let body = self.send(request).await?;
        Ok(decode_response(&body))
    }

    pub async fn domains_list(&self, params: &DomainListParams) -> RegistrarResult<Value> {
        self.call(&commands::domains_list(params)).await
    }

    pub async fn domains_check<S: AsRef<str>>(&self, domains: &[S]) -> RegistrarResult<Value> {
        self.call(&commands::domains_check(domains)).await
    }

    pub async fn domains_get_info(
        &self,
        domain_name: &str,
        host_name: Option<&str>,
    ) -> RegistrarResult<Value> {
        self.call(&commands::domains_get_info(domain_name, host_name))
            .await
    }

    pub async fn domains_get_contacts(&self, domain_name: &str) -> RegistrarResult<Value> {
        self.call(&commands::domains_get_contacts(domain_name)).await
    }

    pub async fn domains_set_contacts(
        &self,
        params: &DomainSetContactsParams,
    ) -> RegistrarResult<Value> {
        self.call(&commands::domains_set_contacts(params)).await
    }

    pub async fn domains_create(&self, params: &DomainCreateParams) -> RegistrarResult<Value> {
        self.call(&commands::domains_create(params)).await
    }

    pub async fn domains_renew(&self, params: &DomainRenewParams) -> RegistrarResult<Value> {
        self.call(&commands::domains_renew(params)).await
    }

    pub async fn domains_reactivate(
        &self,
        params: &DomainReactivateParams,
    ) -> RegistrarResult<Value> {
        self.call(&commands::domains_reactivate(params)).await
    }

    pub async fn domains_get_registrar_lock(&self, domain_name: &str) -> RegistrarResult<Value> {
        self.call(&commands::domains_get_registrar_lock(domain_name))
            .await
    }

    pub async fn domains_set_registrar_lock(
        &self,
        domain_name: &str,
        action: LockAction,
    ) -> RegistrarResult<Value> {
        self.call(&commands::domains_set_registrar_lock(domain_name, action))
            .await
    }

    /// Fetch the TLD list as JSON.
    pub async fn domains_get_tld_list(&self) -> RegistrarResult<Value> {
        self.call(&commands::domains_get_tld_list()).await
    }

    /// Fetch the TLD list as a parsed element tree.
    ///
    /// Unlike the JSON methods, a body that is not well-formed XML is an error.
    pub async fn fetch_tld_list_document(&self) -> RegistrarResult<XmlElement> {
        let body = self.send(&commands::domains_get_tld_list()).await?;
        Ok(XmlElement::parse(&body)?)
    }

    pub async fn dns_get_list(&self, sld: &str, tld: &str) -> RegistrarResult<Value> {
        self.call(&commands::dns_get_list(sld, tld)).await
    }

    pub async fn dns_set_custom<S: AsRef<str>>(
        &self,
        sld: &str,
        tld: &str,
        nameservers: &[S],
    ) -> RegistrarResult<Value> {
        self.call(&commands::dns_set_custom(sld, tld, nameservers))
            .await
    }

    pub async fn dns_set_hosts(
        &self,
        sld: &str,
        tld: &str,
        hosts: &[DnsHost],
    ) -> RegistrarResult<Value> {
        self.call(&commands::dns_set_hosts(sld, tld, hosts)).await
    }
}

#[async_trait]
impl TldSource for RegistrarClient {
    async fn fetch_tlds(&self) -> RegistrarResult<Vec<TldInfo>> {
        let document = self.fetch_tld_list_document().await?;
        Ok(parse_tld_list(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RegistrarConfig {
        RegistrarConfig {
            api_user: "alice".to_string(),
            api_key: "secret-key".to_string(),
            client_ip: "203.0.113.7".to_string(),
            use_sandbox: false,
            api_url: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_endpoint_selection() {
        let mut cfg = config();
        assert_eq!(RegistrarClient::endpoint_for(&cfg), PRODUCTION_URL);

        cfg.use_sandbox = true;
        assert_eq!(RegistrarClient::endpoint_for(&cfg), SANDBOX_URL);

        cfg.api_url = Some("http://localhost:9999/xml.response".to_string());
        assert_eq!(
            RegistrarClient::endpoint_for(&cfg),
            "http://localhost:9999/xml.response"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = RegistrarClient::new(&config()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("secret-key"));
    }
}

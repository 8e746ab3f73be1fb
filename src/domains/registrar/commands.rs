//! Request builders for every supported registrar command.
//!
//! Each builder maps typed parameters onto the flat, query-string shaped
//! parameter list the registrar expects. Credentials are not added here;
//! the client attaches them to every outbound request.

use super::types::{
    Contact, ContactRole, DnsHost, DomainCreateParams, DomainListParams, DomainReactivateParams,
    DomainRenewParams, DomainSetContactsParams, LockAction,
};

pub const DOMAINS_GET_LIST: &str = "namecheap.domains.getList";
pub const DOMAINS_CHECK: &str = "namecheap.domains.check";
pub const DOMAINS_GET_INFO: &str = "namecheap.domains.getInfo";
pub const DOMAINS_GET_CONTACTS: &str = "namecheap.domains.getContacts";
pub const DOMAINS_SET_CONTACTS: &str = "namecheap.domains.setContacts";
pub const DOMAINS_CREATE: &str = "namecheap.domains.create";
pub const DOMAINS_RENEW: &str = "namecheap.domains.renew";
pub const DOMAINS_REACTIVATE: &str = "namecheap.domains.reactivate";
pub const DOMAINS_GET_REGISTRAR_LOCK: &str = "namecheap.domains.getRegistrarLock";
pub const DOMAINS_SET_REGISTRAR_LOCK: &str = "namecheap.domains.setRegistrarLock";
pub const DOMAINS_GET_TLD_LIST: &str = "namecheap.domains.getTldList";
pub const DNS_GET_LIST: &str = "namecheap.domains.dns.getList";
pub const DNS_SET_CUSTOM: &str = "namecheap.domains.dns.setCustom";
pub const DNS_SET_HOSTS: &str = "namecheap.domains.dns.setHosts";

const DEFAULT_LIST_PAGE: u32 = 1;
const DEFAULT_LIST_PAGE_SIZE: u32 = 20;

/// A registrar command with its operation-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarRequest {
    command: &'static str,
    params: Vec<(String, String)>,
}

impl RegistrarRequest {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            params: Vec::new(),
        }
    }

    /// Value of the `Command` parameter.
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Operation-specific parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter by its wire name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.params.push((name.into(), value.to_string()));
    }

    fn push_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Push `<Base><index>` with a 1-based index.
    fn push_indexed(&mut self, base: &str, index: usize, value: impl ToString) {
        self.push(format!("{base}{index}"), value);
    }

    fn push_contact(&mut self, role: ContactRole, contact: &Contact) {
        let prefix = role.prefix();
        for (suffix, value) in contact.wire_fields() {
            self.push_opt(format!("{prefix}{suffix}"), value);
        }
    }

    fn push_contacts(&mut self, contacts: &[(ContactRole, Option<&Contact>)]) {
        for (role, contact) in contacts {
            if let Some(contact) = contact {
                self.push_contact(*role, contact);
            }
        }
    }
}

pub fn domains_list(params: &DomainListParams) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_GET_LIST);
    request.push("ListType", params.list_type.unwrap_or_default().as_str());
    request.push("SearchTerm", params.search_term.as_deref().unwrap_or_default());
    request.push(
        "Page",
        params.page.filter(|p| *p > 0).unwrap_or(DEFAULT_LIST_PAGE),
    );
    request.push(
        "PageSize",
        params
            .page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_LIST_PAGE_SIZE),
    );
    request.push_opt("SortBy", params.sort_by.map(|s| s.as_str()));
    request
}

pub fn domains_check<S: AsRef<str>>(domains: &[S]) -> RegistrarRequest {
    let domain_list = domains
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    let mut request = RegistrarRequest::new(DOMAINS_CHECK);
    request.push("DomainList", domain_list);
    request
}

pub fn domains_get_info(domain_name: &str, host_name: Option<&str>) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_GET_INFO);
    request.push("DomainName", domain_name);
    request.push_opt("HostName", host_name);
    request
}

pub fn domains_get_contacts(domain_name: &str) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_GET_CONTACTS);
    request.push("DomainName", domain_name);
    request
}

pub fn domains_set_contacts(params: &DomainSetContactsParams) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_SET_CONTACTS);
    request.push("DomainName", &params.domain_name);
    request.push_contacts(&[
        (ContactRole::Registrant, params.registrant.as_ref()),
        (ContactRole::Tech, params.tech.as_ref()),
        (ContactRole::Admin, params.admin.as_ref()),
        (ContactRole::AuxBilling, params.aux_billing.as_ref()),
    ]);
    request
}

pub fn domains_create(params: &DomainCreateParams) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_CREATE);
    request.push("DomainName", &params.domain_name);
    request.push("Years", params.years);
    request.push_contacts(&[
        (ContactRole::Registrant, Some(&params.registrant)),
        (ContactRole::Tech, params.tech.as_ref()),
        (ContactRole::Admin, params.admin.as_ref()),
        (ContactRole::AuxBilling, params.aux_billing.as_ref()),
        (ContactRole::Billing, params.billing.as_ref()),
    ]);
    request.push_opt("IdnCode", params.idn_code.as_deref());
    request.push_opt("ExtendedAttributes", params.extended_attributes.as_deref());
    request.push_opt("Nameservers", params.nameservers.as_deref());
    request.push_opt(
        "AddFreeWhoisguard",
        params.add_free_whoisguard.map(|v| v.as_str()),
    );
    request.push_opt("WGEnabled", params.wg_enabled.map(|v| v.as_str()));
    request.push_opt("IsPremiumDomain", params.is_premium_domain);
    request.push_opt("PremiumPrice", params.premium_price);
    request.push_opt("EapFee", params.eap_fee);
    request
}

pub fn domains_renew(params: &DomainRenewParams) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_RENEW);
    request.push("DomainName", &params.domain_name);
    request.push("Years", params.years);
    request.push_opt("IsPremiumDomain", params.is_premium_domain);
    request
}

pub fn domains_reactivate(params: &DomainReactivateParams) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_REACTIVATE);
    request.push("DomainName", &params.domain_name);
    request.push_opt("IsPremiumDomain", params.is_premium_domain);
    request
}

pub fn domains_get_registrar_lock(domain_name: &str) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_GET_REGISTRAR_LOCK);
    request.push("DomainName", domain_name);
    request
}

pub fn domains_set_registrar_lock(domain_name: &str, action: LockAction) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DOMAINS_SET_REGISTRAR_LOCK);
    request.push("DomainName", domain_name);
    request.push("LockAction", action.as_str());
    request
}

pub fn domains_get_tld_list() -> RegistrarRequest {
    RegistrarRequest::new(DOMAINS_GET_TLD_LIST)
}

pub fn dns_get_list(sld: &str, tld: &str) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DNS_GET_LIST);
    request.push("SLD", sld);
    request.push("TLD", tld);
    request
}

pub fn dns_set_custom<S: AsRef<str>>(sld: &str, tld: &str, nameservers: &[S]) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DNS_SET_CUSTOM);
    request.push("SLD", sld);
    request.push("TLD", tld);
    for (i, nameserver) in nameservers.iter().enumerate() {
        request.push_indexed("NameServers", i + 1, nameserver.as_ref());
    }
    request
}

pub fn dns_set_hosts(sld: &str, tld: &str, hosts: &[DnsHost]) -> RegistrarRequest {
    let mut request = RegistrarRequest::new(DNS_SET_HOSTS);
    request.push("SLD", sld);
    request.push("TLD", tld);
    for (i, host) in hosts.iter().enumerate() {
        let index = i + 1;
        request.push_indexed("HostName", index, &host.hostname);
        request.push_indexed("RecordType", index, host.record_type.as_str());
        request.push_indexed("Address", index, &host.address);
        if let Some(priority) = host.mx_priority {
            request.push_indexed("MXPref", index, priority);
        }
        if let Some(ttl) = host.ttl {
            request.push_indexed("TTL", index, ttl);
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::registrar::types::{DnsRecordType, DomainListType, DomainSortBy, YesNo};

    fn host(name: &str, record_type: DnsRecordType, ttl: Option<u32>, mx: Option<u32>) -> DnsHost {
        DnsHost {
            hostname: name.to_string(),
            record_type,
            address: format!("{name}.target"),
            mx_priority: mx,
            ttl,
        }
    }

    #[test]
    fn test_domains_list_defaults() {
        let request = domains_list(&DomainListParams::default());
        assert_eq!(request.command(), DOMAINS_GET_LIST);
        assert_eq!(request.param("ListType"), Some("ALL"));
        assert_eq!(request.param("SearchTerm"), Some(""));
        assert_eq!(request.param("Page"), Some("1"));
        assert_eq!(request.param("PageSize"), Some("20"));
        assert_eq!(request.param("SortBy"), None);
    }

    #[test]
    fn test_domains_list_explicit_values() {
        let request = domains_list(&DomainListParams {
            list_type: Some(DomainListType::Expiring),
            search_term: Some("shop".to_string()),
            page: Some(3),
            page_size: Some(50),
            sort_by: Some(DomainSortBy::CreateDateDesc),
        });
        assert_eq!(request.param("ListType"), Some("EXPIRING"));
        assert_eq!(request.param("SearchTerm"), Some("shop"));
        assert_eq!(request.param("Page"), Some("3"));
        assert_eq!(request.param("PageSize"), Some("50"));
        assert_eq!(request.param("SortBy"), Some("CREATEDATE_DESC"));
    }

    #[test]
    fn test_domains_list_zero_page_uses_default() {
        let request = domains_list(&DomainListParams {
            page: Some(0),
            page_size: Some(0),
            ..Default::default()
        });
        assert_eq!(request.param("Page"), Some("1"));
        assert_eq!(request.param("PageSize"), Some("20"));
    }

    #[test]
    fn test_domains_check_joins_with_single_comma() {
        let request = domains_check(&["example.com", "example.net", "example.io"]);
        assert_eq!(
            request.param("DomainList"),
            Some("example.com,example.net,example.io")
        );

        let single = domains_check(&["only.org"]);
        assert_eq!(single.param("DomainList"), Some("only.org"));
    }

    #[test]
    fn test_dns_set_custom_indexes_nameservers() {
        let request = dns_set_custom("example", "com", &["ns1.host.net", "ns2.host.net"]);
        assert_eq!(
            request.params(),
            &[
                ("SLD".to_string(), "example".to_string()),
                ("TLD".to_string(), "com".to_string()),
                ("NameServers1".to_string(), "ns1.host.net".to_string()),
                ("NameServers2".to_string(), "ns2.host.net".to_string()),
            ]
        );
    }

    #[test]
    fn test_dns_set_hosts_indexes_every_entry_in_order() {
        let hosts: Vec<DnsHost> = (0..7)
            .map(|i| host(&format!("h{i}"), DnsRecordType::A, None, None))
            .collect();
        let request = dns_set_hosts("example", "com", &hosts);

        for (i, host) in hosts.iter().enumerate() {
            let n = i + 1;
            assert_eq!(request.param(&format!("HostName{n}")), Some(host.hostname.as_str()));
            assert_eq!(request.param(&format!("RecordType{n}")), Some("A"));
            assert_eq!(request.param(&format!("Address{n}")), Some(host.address.as_str()));
        }
        assert_eq!(request.param("HostName0"), None);
        assert_eq!(request.param("HostName8"), None);
        // SLD, TLD and three fields per host
        assert_eq!(request.params().len(), 2 + 3 * hosts.len());
    }

    #[test]
    fn test_dns_set_hosts_optional_fields_only_when_present() {
        let hosts = vec![
            host("@", DnsRecordType::A, Some(300), None),
            host("mail", DnsRecordType::Mx, None, Some(10)),
            host("www", DnsRecordType::Cname, None, None),
        ];
        let request = dns_set_hosts("example", "com", &hosts);

        assert_eq!(request.param("TTL1"), Some("300"));
        assert_eq!(request.param("MXPref1"), None);
        assert_eq!(request.param("TTL2"), None);
        assert_eq!(request.param("MXPref2"), Some("10"));
        assert_eq!(request.param("RecordType2"), Some("MX"));
        assert_eq!(request.param("TTL3"), None);
        assert_eq!(request.param("MXPref3"), None);
    }

    #[test]
    fn test_dns_set_hosts_empty_sequence() {
        let request = dns_set_hosts("example", "com", &[]);
        assert_eq!(request.params().len(), 2);
    }

    #[test]
    fn test_set_contacts_drops_unset_fields() {
        let request = domains_set_contacts(&DomainSetContactsParams {
            domain_name: "example.com".to_string(),
            registrant: Some(Contact {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                ..Default::default()
            }),
            aux_billing: Some(Contact {
                email_address: Some("billing@example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(
            request.params(),
            &[
                ("DomainName".to_string(), "example.com".to_string()),
                ("RegistrantFirstName".to_string(), "Ada".to_string()),
                ("RegistrantLastName".to_string(), "Lovelace".to_string()),
                (
                    "AuxBillingEmailAddress".to_string(),
                    "billing@example.com".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_create_maps_every_defined_field() {
        let request = domains_create(&DomainCreateParams {
            domain_name: "example.io".to_string(),
            years: 2,
            registrant: Contact {
                first_name: Some("Ada".to_string()),
                country: Some("GB".to_string()),
                ..Default::default()
            },
            tech: Some(Contact {
                phone: Some("+44.2071234567".to_string()),
                ..Default::default()
            }),
            billing: Some(Contact {
                city: Some("London".to_string()),
                ..Default::default()
            }),
            nameservers: Some("ns1.host.net,ns2.host.net".to_string()),
            add_free_whoisguard: Some(YesNo::Yes),
            wg_enabled: Some(YesNo::No),
            is_premium_domain: Some(false),
            premium_price: Some(12.5),
            ..Default::default()
        });

        assert_eq!(request.command(), DOMAINS_CREATE);
        assert_eq!(request.param("DomainName"), Some("example.io"));
        assert_eq!(request.param("Years"), Some("2"));
        assert_eq!(request.param("RegistrantFirstName"), Some("Ada"));
        assert_eq!(request.param("RegistrantCountry"), Some("GB"));
        assert_eq!(request.param("TechPhone"), Some("+44.2071234567"));
        assert_eq!(request.param("BillingCity"), Some("London"));
        assert_eq!(request.param("Nameservers"), Some("ns1.host.net,ns2.host.net"));
        assert_eq!(request.param("AddFreeWhoisguard"), Some("yes"));
        assert_eq!(request.param("WGEnabled"), Some("no"));
        assert_eq!(request.param("IsPremiumDomain"), Some("false"));
        assert_eq!(request.param("PremiumPrice"), Some("12.5"));

        assert_eq!(request.param("EapFee"), None);
        assert_eq!(request.param("IdnCode"), None);
        assert_eq!(request.param("RegistrantLastName"), None);
        assert!(request.params().iter().all(|(k, _)| !k.starts_with("Admin")));
        assert!(request.params().iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_renew_and_reactivate() {
        let renew = domains_renew(&DomainRenewParams {
            domain_name: "example.com".to_string(),
            years: 1,
            is_premium_domain: None,
        });
        assert_eq!(renew.param("Years"), Some("1"));
        assert_eq!(renew.param("IsPremiumDomain"), None);

        let reactivate = domains_reactivate(&DomainReactivateParams {
            domain_name: "example.com".to_string(),
            is_premium_domain: Some(true),
        });
        assert_eq!(reactivate.command(), DOMAINS_REACTIVATE);
        assert_eq!(reactivate.param("IsPremiumDomain"), Some("true"));
    }

    #[test]
    fn test_registrar_lock_and_info() {
        let lock = domains_set_registrar_lock("example.com", LockAction::Unlock);
        assert_eq!(lock.param("LockAction"), Some("UNLOCK"));

        let info = domains_get_info("example.com", None);
        assert_eq!(info.params().len(), 1);

        let info = domains_get_info("example.com", Some("mail.example.com"));
        assert_eq!(info.param("HostName"), Some("mail.example.com"));
    }
}

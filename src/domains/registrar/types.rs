//! Typed parameters for registrar commands.
//!
//! These types double as MCP tool argument schemas, so they derive
//! `JsonSchema` and use the camelCase field names clients send.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which domains `namecheap.domains.getList` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomainListType {
    #[default]
    All,
    Expiring,
    Expired,
}

impl DomainListType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Expiring => "EXPIRING",
            Self::Expired => "EXPIRED",
        }
    }
}

/// Sort order for `namecheap.domains.getList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DomainSortBy {
    #[serde(rename = "NAME")]
    Name,
    #[serde(rename = "NAME_DESC")]
    NameDesc,
    #[serde(rename = "EXPIREDATE")]
    ExpireDate,
    #[serde(rename = "EXPIREDATE_DESC")]
    ExpireDateDesc,
    #[serde(rename = "CREATEDATE")]
    CreateDate,
    #[serde(rename = "CREATEDATE_DESC")]
    CreateDateDesc,
}

impl DomainSortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::NameDesc => "NAME_DESC",
            Self::ExpireDate => "EXPIREDATE",
            Self::ExpireDateDesc => "EXPIREDATE_DESC",
            Self::CreateDate => "CREATEDATE",
            Self::CreateDateDesc => "CREATEDATE_DESC",
        }
    }
}

/// Parameters for listing domains in the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainListParams {
    /// Type of list: ALL, EXPIRING or EXPIRED (default: ALL)
    #[serde(default)]
    pub list_type: Option<DomainListType>,

    /// Filter domains by search term
    #[serde(default)]
    pub search_term: Option<String>,

    /// Page number (default: 1)
    #[serde(default)]
    pub page: Option<u32>,

    /// Number of domains per page (default: 20)
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Sort order for the result
    #[serde(default)]
    pub sort_by: Option<DomainSortBy>,
}

/// Registrar lock action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
        }
    }
}

/// DNS record types accepted by `namecheap.domains.dns.setHosts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Caa,
}

impl DnsRecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

/// A single DNS host record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DnsHost {
    /// Subdomain or @ for root
    pub hostname: String,

    /// DNS record type
    pub record_type: DnsRecordType,

    /// Value for the DNS record
    pub address: String,

    /// Priority for MX records
    #[serde(default)]
    pub mx_priority: Option<u32>,

    /// Time to live in seconds (registrar default: 1800)
    #[serde(default)]
    pub ttl: Option<u32>,
}

/// A yes/no flag as the registrar spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Role a contact block is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Registrant,
    Tech,
    Admin,
    AuxBilling,
    Billing,
}

impl ContactRole {
    /// Wire-name prefix for this role's contact fields.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Registrant => "Registrant",
            Self::Tech => "Tech",
            Self::Admin => "Admin",
            Self::AuxBilling => "AuxBilling",
            Self::Billing => "Billing",
        }
    }
}

/// Contact details. Every field is optional; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Two-letter country code
    #[serde(default)]
    pub country: Option<String>,
    /// Phone number in the format +NNN.NNNNNNNNNN
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_ext: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

impl Contact {
    /// Wire-name suffix paired with each field.
    pub fn wire_fields(&self) -> [(&'static str, Option<&str>); 14] {
        [
            ("FirstName", self.first_name.as_deref()),
            ("LastName", self.last_name.as_deref()),
            ("Address1", self.address1.as_deref()),
            ("Address2", self.address2.as_deref()),
            ("City", self.city.as_deref()),
            ("StateProvince", self.state_province.as_deref()),
            ("PostalCode", self.postal_code.as_deref()),
            ("Country", self.country.as_deref()),
            ("Phone", self.phone.as_deref()),
            ("PhoneExt", self.phone_ext.as_deref()),
            ("Fax", self.fax.as_deref()),
            ("EmailAddress", self.email_address.as_deref()),
            ("OrganizationName", self.organization_name.as_deref()),
            ("JobTitle", self.job_title.as_deref()),
        ]
    }

    /// Wire names of registrant fields that are absent or blank.
    pub fn missing_registrant_fields(&self) -> Vec<&'static str> {
        self.wire_fields()
            .into_iter()
            .filter(|(name, value)| {
                REQUIRED_REGISTRANT_FIELDS.contains(name)
                    && value.is_none_or(|v| v.trim().is_empty())
            })
            .map(|(name, _)| name)
            .collect()
    }
}

/// Fields the registrar requires on the registrant of a new domain.
pub const REQUIRED_REGISTRANT_FIELDS: [&str; 9] = [
    "FirstName",
    "LastName",
    "Address1",
    "City",
    "StateProvince",
    "PostalCode",
    "Country",
    "Phone",
    "EmailAddress",
];

/// Parameters for `namecheap.domains.setContacts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainSetContactsParams {
    /// Domain to update
    pub domain_name: String,
    #[serde(default)]
    pub registrant: Option<Contact>,
    #[serde(default)]
    pub tech: Option<Contact>,
    #[serde(default)]
    pub admin: Option<Contact>,
    #[serde(default)]
    pub aux_billing: Option<Contact>,
}

/// Parameters for `namecheap.domains.create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainCreateParams {
    /// Domain to register
    pub domain_name: String,

    /// Registration period in years
    pub years: u32,

    /// Registrant contact
    pub registrant: Contact,

    #[serde(default)]
    pub tech: Option<Contact>,
    #[serde(default)]
    pub admin: Option<Contact>,
    #[serde(default)]
    pub aux_billing: Option<Contact>,
    #[serde(default)]
    pub billing: Option<Contact>,

    /// IDN language code for internationalized names
    #[serde(default)]
    pub idn_code: Option<String>,

    /// Extended attributes required by some TLDs
    #[serde(default)]
    pub extended_attributes: Option<String>,

    /// Comma-separated list of custom nameservers
    #[serde(default)]
    pub nameservers: Option<String>,

    /// Add free WhoisGuard privacy protection
    #[serde(default)]
    pub add_free_whoisguard: Option<YesNo>,

    /// Enable WhoisGuard privacy protection
    #[serde(default)]
    pub wg_enabled: Option<YesNo>,

    #[serde(default)]
    pub is_premium_domain: Option<bool>,
    #[serde(default)]
    pub premium_price: Option<f64>,
    #[serde(default)]
    pub eap_fee: Option<f64>,
}

/// Parameters for `namecheap.domains.renew`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainRenewParams {
    /// Domain to renew
    pub domain_name: String,

    /// Number of years to renew
    pub years: u32,

    #[serde(default)]
    pub is_premium_domain: Option<bool>,
}

/// Parameters for `namecheap.domains.reactivate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainReactivateParams {
    /// Expired domain to reactivate
    pub domain_name: String,

    #[serde(default)]
    pub is_premium_domain: Option<bool>,
}

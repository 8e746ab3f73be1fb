//! Typed TLD metadata extracted from `namecheap.domains.getTldList`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::xml::XmlElement;

const DEFAULT_MIN_REGISTER_YEARS: u32 = 1;
const DEFAULT_MAX_REGISTER_YEARS: u32 = 10;
const DEFAULT_MIN_RENEW_YEARS: u32 = 1;
const DEFAULT_MAX_RENEW_YEARS: u32 = 10;
const DEFAULT_TRANSFER_LOCK_DAYS: u32 = 60;

/// Metadata for a single top-level domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TldInfo {
    pub name: String,
    pub is_api_registerable: bool,
    pub is_renewal_allowed: bool,
    pub min_register_years: u32,
    pub max_register_years: u32,
    pub min_renew_years: u32,
    pub max_renew_years: u32,
    pub is_transferrable: bool,
    pub transfer_lock_days: u32,
    pub is_privacy_protection_allowed: bool,
    pub is_idn_supported: bool,
    pub is_premium: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_idn_languages: Option<Vec<String>>,
}

impl TldInfo {
    /// Build from a `<Tld>` element. Returns `None` when it has no `Name`.
    ///
    /// Flags that the registrar spells differently across API revisions are
    /// read under both names.
    pub fn from_element(element: &XmlElement) -> Option<Self> {
        let name = element.attr("Name")?.trim();
        if name.is_empty() {
            return None;
        }

        let is_true = |keys: &[&str]| keys.iter().any(|k| attr_is(element, k, "true"));
        let is_not_false = |keys: &[&str]| !keys.iter().any(|k| attr_is(element, k, "false"));
        let number = |key: &str, default: u32| {
            element
                .attr(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let categories = element
            .children_named("Categories")
            .flat_map(|c| c.children_named("TldCategory"))
            .filter_map(|c| c.attr("Name"))
            .map(str::to_string)
            .collect();

        let idn_languages: Vec<String> = element
            .children_named("IdnLanguages")
            .flat_map(|c| c.children_named("IdnLanguage"))
            .filter_map(|c| c.attr("Name").or(Some(c.text.as_str())))
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            name: name.to_string(),
            is_api_registerable: is_true(&["IsApiRegisterable"]),
            is_renewal_allowed: is_true(&["IsApiRenewalAllowed", "IsApiRenewable"]),
            min_register_years: number("MinRegisterYears", DEFAULT_MIN_REGISTER_YEARS),
            max_register_years: number("MaxRegisterYears", DEFAULT_MAX_REGISTER_YEARS),
            min_renew_years: number("MinRenewYears", DEFAULT_MIN_RENEW_YEARS),
            max_renew_years: number("MaxRenewYears", DEFAULT_MAX_RENEW_YEARS),
            is_transferrable: is_not_false(&["IsApiTransferrable", "IsApiTransferable"]),
            transfer_lock_days: number("TransferLockDays", DEFAULT_TRANSFER_LOCK_DAYS),
            is_privacy_protection_allowed: is_not_false(&["IsPrivacyProtectionAllowed"]),
            is_idn_supported: is_true(&["IsIdnSupported", "IsSupportsIDN"]),
            is_premium: is_true(&["IsPremiumTLD"]),
            categories,
            supported_idn_languages: (!idn_languages.is_empty()).then_some(idn_languages),
        })
    }

    /// Whether the TLD belongs to `category` (case-insensitive).
    pub fn in_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

fn attr_is(element: &XmlElement, key: &str, expected: &str) -> bool {
    element
        .attr(key)
        .is_some_and(|v| v == expected)
}

/// Extract every `<Tld>` element of a TLD-list response, in document order.
pub fn parse_tld_list(root: &XmlElement) -> Vec<TldInfo> {
    root.descendants_named("Tld")
        .into_iter()
        .filter_map(TldInfo::from_element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TLD_LIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <RequestedCommand>namecheap.domains.gettldlist</RequestedCommand>
  <CommandResponse Type="namecheap.domains.getTldList">
    <Tlds>
      <Tld Name="biz" MinRegisterYears="1" MaxRegisterYears="10" MinRenewYears="1" MaxRenewYears="9" IsApiRegisterable="true" IsApiRenewable="true" IsApiTransferable="true" IsSupportsIDN="true" TransferLockDays="60">Most recognized top level domain<Categories><TldCategory Name="popular" SequenceNumber="10" /><TldCategory Name="business" SequenceNumber="20" /></Categories></Tld>
      <Tld Name="ac" IsApiRegisterable="false" IsApiTransferrable="false" IsPrivacyProtectionAllowed="false" MaxRegisterYears="abc" TransferLockDays="30" IsPremiumTLD="true" />
      <Tld Name="io" IsApiRegisterable="true" IsApiRenewalAllowed="true" IsIdnSupported="true"><IdnLanguages><IdnLanguage Name="de" /><IdnLanguage Name="es" /></IdnLanguages></Tld>
      <Tld SequenceNumber="99" />
    </Tlds>
  </CommandResponse>
</ApiResponse>"#;

    fn parsed() -> Vec<TldInfo> {
        let root = XmlElement::parse(TLD_LIST).unwrap();
        parse_tld_list(&root)
    }

    #[test]
    fn test_parse_extracts_every_named_tld_in_order() {
        let names: Vec<_> = parsed().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["biz", "ac", "io"]);
    }

    #[test]
    fn test_parse_flags_and_numbers() {
        let tlds = parsed();
        let biz = &tlds[0];
        assert!(biz.is_api_registerable);
        assert!(biz.is_renewal_allowed);
        assert!(biz.is_transferrable);
        assert!(biz.is_idn_supported);
        assert!(!biz.is_premium);
        assert_eq!(biz.max_renew_years, 9);
        assert_eq!(biz.categories, vec!["popular", "business"]);
        assert!(biz.in_category("Popular"));
        assert_eq!(biz.supported_idn_languages, None);
    }

    #[test]
    fn test_parse_defaults_and_negative_flags() {
        let tlds = parsed();
        let ac = &tlds[1];
        assert!(!ac.is_api_registerable);
        assert!(!ac.is_renewal_allowed);
        assert!(!ac.is_transferrable);
        assert!(!ac.is_privacy_protection_allowed);
        assert!(ac.is_premium);
        assert_eq!(ac.min_register_years, 1);
        // Unparsable value falls back to the default
        assert_eq!(ac.max_register_years, 10);
        assert_eq!(ac.transfer_lock_days, 30);
        assert!(ac.categories.is_empty());
    }

    #[test]
    fn test_parse_absent_attributes_use_defaults() {
        let tlds = parsed();
        let io = &tlds[2];
        assert!(io.is_api_registerable);
        assert!(io.is_renewal_allowed);
        assert!(io.is_transferrable);
        assert!(io.is_privacy_protection_allowed);
        assert!(io.is_idn_supported);
        assert_eq!(io.min_renew_years, 1);
        assert_eq!(io.max_renew_years, 10);
        assert_eq!(io.transfer_lock_days, 60);
        assert_eq!(
            io.supported_idn_languages,
            Some(vec!["de".to_string(), "es".to_string()])
        );
    }

    #[test]
    fn test_flags_match_exact_spelling() {
        let root = XmlElement::parse(
            r#"<Tlds><Tld Name="xyz" IsApiRegisterable="TRUE" IsPrivacyProtectionAllowed="False" /></Tlds>"#,
        )
        .unwrap();
        let xyz = &parse_tld_list(&root)[0];
        assert!(!xyz.is_api_registerable);
        assert!(xyz.is_privacy_protection_allowed);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(&parsed()[0]).unwrap();
        assert_eq!(value["isApiRegisterable"], true);
        assert_eq!(value["transferLockDays"], 60);
        assert!(value.get("supportedIdnLanguages").is_none());
    }
}

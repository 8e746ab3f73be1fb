//! XML response decoding.
//!
//! Namecheap answers every command with an `<ApiResponse>` XML document.
//! Responses are parsed with a streaming reader into a small element tree,
//! which typed extractors (see `tld.rs`) walk directly and which can be
//! turned into a JSON value for passthrough tools.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Key under which the original body is returned when decoding fails.
pub const RAW_FALLBACK_KEY: &str = "raw";

/// Key holding element text when the element also carries attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Errors raised while parsing an XML document.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Error reported by the underlying reader (bad syntax, mismatched tags, bad escapes).
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Malformed attribute list.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// Element or attribute name is not valid UTF-8.
    #[error("XML name is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Structurally invalid document (no root, several roots, unclosed elements).
    #[error("Malformed XML document: {0}")]
    Malformed(String),
}

/// A parsed XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Trimmed text segments joined by a single space.
    pub text: String,
}

impl XmlElement {
    /// Parse a complete document and return its root element.
    pub fn parse(body: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(body);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        XmlError::Malformed("closing tag without an open element".to_string())
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(data) => {
                    let bytes = data.into_inner();
                    push_text(&mut stack, std::str::from_utf8(&bytes)?)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::Malformed(format!(
                "element <{}> is never closed",
                open.name
            )));
        }

        root.ok_or_else(|| XmlError::Malformed("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children with the given element name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First direct child with the given element name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All descendants (excluding `self`) with the given name, in document order.
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }

    /// Convert to JSON as `{ <name>: <body> }`.
    ///
    /// Attributes become string-valued keys of the body object, child
    /// elements become nested keys, and repeated keys collapse into an array
    /// in document order. An element with neither attributes nor children is
    /// represented by its text alone. Leaf values are never coerced.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.name.clone(), self.body_json());
        Value::Object(map)
    }

    fn body_json(&self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text.clone());
        }

        let mut body = Map::new();
        for (key, value) in &self.attributes {
            insert_merged(&mut body, key, Value::String(value.clone()));
        }
        for child in &self.children {
            insert_merged(&mut body, &child.name, child.body_json());
        }
        if !self.text.is_empty() {
            body.insert(TEXT_KEY.to_string(), Value::String(self.text.clone()));
        }

        Value::Object(body)
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }

    if root.is_some() {
        return Err(XmlError::Malformed(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), XmlError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(current) => {
            if !current.text.is_empty() {
                current.text.push(' ');
            }
            current.text.push_str(text.trim());
            Ok(())
        }
        None => Err(XmlError::Malformed(
            "text content outside the root element".to_string(),
        )),
    }
}

fn collect_descendants<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    for child in &element.children {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}

fn insert_merged(body: &mut Map<String, Value>, key: &str, value: Value) {
    match body.get_mut(key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let previous = existing.take();
            *existing = Value::Array(vec![previous, value]);
        }
        None => {
            body.insert(key.to_string(), value);
        }
    }
}

/// Decode a registrar response body into JSON.
///
/// Never fails: a body that does not parse is returned as `{"raw": body}`.
pub fn decode_response(body: &str) -> Value {
    match XmlElement::parse(body) {
        Ok(root) => root.to_json(),
        Err(e) => {
            warn!("Falling back to raw response body: {}", e);
            raw_fallback(body)
        }
    }
}

/// Build the degraded `{"raw": body}` value.
pub fn raw_fallback(body: &str) -> Value {
    let mut map = Map::new();
    map.insert(RAW_FALLBACK_KEY.to_string(), Value::String(body.to_string()));
    Value::Object(map)
}

/// Whether a decoded value is the raw-text fallback.
pub fn is_raw_fallback(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.len() == 1 && map.get(RAW_FALLBACK_KEY).is_some_and(Value::is_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CHECK_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <RequestedCommand>namecheap.domains.check</RequestedCommand>
  <CommandResponse Type="namecheap.domains.check">
    <DomainCheckResult Domain="example.com" Available="false" />
    <DomainCheckResult Domain="example.io" Available="true" />
  </CommandResponse>
  <ExecutionTime>0.12</ExecutionTime>
</ApiResponse>"#;

    #[test]
    fn test_parse_builds_tree() {
        let root = XmlElement::parse(CHECK_RESPONSE).unwrap();
        assert_eq!(root.name, "ApiResponse");
        assert_eq!(root.attr("Status"), Some("OK"));

        let command = root.child("CommandResponse").unwrap();
        let results: Vec<_> = command.children_named("DomainCheckResult").collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].attr("Domain"), Some("example.io"));
        assert_eq!(
            root.child("RequestedCommand").map(|e| e.text.as_str()),
            Some("namecheap.domains.check")
        );
    }

    #[test]
    fn test_to_json_collapses_repeated_elements() {
        let value = decode_response(CHECK_RESPONSE);
        let response = &value["ApiResponse"];

        assert_eq!(response["Status"], "OK");
        assert_eq!(response["RequestedCommand"], "namecheap.domains.check");
        assert_eq!(response["ExecutionTime"], "0.12");
        assert_eq!(response["Errors"], "");

        let results = response["CommandResponse"]["DomainCheckResult"]
            .as_array()
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["Domain"], "example.com");
        assert_eq!(results[1]["Available"], "true");
    }

    #[test]
    fn test_text_alongside_attributes() {
        let value = decode_response(r#"<Error Number="2011166">Invalid domain</Error>"#);
        assert_eq!(
            value,
            json!({ "Error": { "Number": "2011166", "#text": "Invalid domain" } })
        );
    }

    #[test]
    fn test_text_segments_split_by_children_are_space_joined() {
        let value = decode_response("<a><b>1</b>mid<c/>tail</a>");
        assert_eq!(
            value,
            json!({ "a": { "#text": "mid tail", "b": "1", "c": "" } })
        );
    }

    #[test]
    fn test_escaped_content_is_unescaped() {
        let root = XmlElement::parse(r#"<Host Address="v=spf1 &amp; ~all">a &lt; b</Host>"#).unwrap();
        assert_eq!(root.attr("Address"), Some("v=spf1 & ~all"));
        assert_eq!(root.text, "a < b");
    }

    #[test]
    fn test_cdata_is_kept_as_text() {
        let root = XmlElement::parse("<Note><![CDATA[<b>bold</b>]]></Note>").unwrap();
        assert_eq!(root.text, "<b>bold</b>");
    }

    #[test]
    fn test_descendants_named_walks_whole_tree() {
        let root = XmlElement::parse("<a><b><c n=\"1\"/></b><c n=\"2\"/></a>").unwrap();
        let found: Vec<_> = root
            .descendants_named("c")
            .iter()
            .filter_map(|e| e.attr("n"))
            .collect();
        assert_eq!(found, vec!["1", "2"]);
    }

    #[test]
    fn test_malformed_input_falls_back_to_raw() {
        let inputs = [
            "",
            "not xml at all",
            "<ApiResponse><Errors></ApiResponse>",
            "<ApiResponse>",
            "<a/><b/>",
            "</a>",
            "<a b=\"1\" b=\"2\"/>",
        ];

        for input in inputs {
            let value = decode_response(input);
            assert!(is_raw_fallback(&value), "expected raw fallback for {input:?}");
            assert_eq!(value[RAW_FALLBACK_KEY], input);
        }
    }

    #[test]
    fn test_is_raw_fallback_rejects_decoded_documents() {
        assert!(!is_raw_fallback(&decode_response(r#"<ApiResponse Status="OK"/>"#)));
        assert!(!is_raw_fallback(&json!({ "raw": 1 })));
        assert!(is_raw_fallback(&raw_fallback("x")));
    }
}

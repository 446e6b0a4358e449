// --- File: crates/wwex_common/src/soap.rs ---
//! SOAP 1.1 envelopes and a small XML tree for reading carrier responses.
//!
//! Requests are written with `quick_xml::Writer`. Responses are read into an
//! [`XmlNode`] tree keyed by local element names, so namespace prefixes the
//! carrier happens to use do not matter.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::Writer;
use thiserror::Error;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Prefix bound to the carrier's service namespace in outgoing envelopes.
pub const SERVICE_PREFIX: &str = "ns1";

pub type XmlWriter = Writer<Vec<u8>>;

#[derive(Error, Debug)]
pub enum SoapError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("I/O error while writing XML: {0}")]
    Io(#[from] std::io::Error),
    #[error("Envelope is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Could not decode XML text: {0}")]
    Encoding(String),
    #[error("Missing element <{0}>")]
    MissingElement(String),
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },
}

impl SoapError {
    pub fn is_fault(&self) -> bool {
        matches!(self, SoapError::Fault { .. })
    }
}

/// Something that can write itself as XML elements.
pub trait WriteXml {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError>;
}

/// Writes `<name>text</name>`.
pub fn write_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), SoapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Writes `<name>text</name>` only when a value is present.
pub fn write_optional_element(
    writer: &mut XmlWriter,
    name: &str,
    text: Option<&str>,
) -> Result<(), SoapError> {
    match text {
        Some(text) => write_element(writer, name, text),
        None => Ok(()),
    }
}

/// Writes `<name>`, the children produced by `children`, then `</name>`.
pub fn write_parent<F>(writer: &mut XmlWriter, name: &str, children: F) -> Result<(), SoapError>
where
    F: FnOnce(&mut XmlWriter) -> Result<(), SoapError>,
{
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    children(writer)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Qualifies an element name with the service prefix.
pub fn service_element(name: &str) -> String {
    format!("{}:{}", SERVICE_PREFIX, name)
}

/// A complete SOAP request.
pub struct SoapEnvelope<'a> {
    /// Target namespace of the carrier service.
    pub namespace: &'a str,
    pub header: Option<&'a dyn WriteXml>,
    pub body: &'a dyn WriteXml,
}

impl SoapEnvelope<'_> {
    pub fn to_xml(&self) -> Result<String, SoapError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut envelope = BytesStart::new("soapenv:Envelope");
        envelope.push_attribute(("xmlns:soapenv", SOAP_ENV_NS));
        envelope.push_attribute((format!("xmlns:{}", SERVICE_PREFIX).as_str(), self.namespace));
        writer.write_event(Event::Start(envelope))?;

        if let Some(header) = self.header {
            write_parent(&mut writer, "soapenv:Header", |w| header.write_xml(w))?;
        }
        write_parent(&mut writer, "soapenv:Body", |w| self.body.write_xml(w))?;

        writer.write_event(Event::End(BytesEnd::new("soapenv:Envelope")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

/// An element of a parsed XML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Local name, without namespace prefix.
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Parses a document and returns its root element.
    pub fn parse(xml: &str) -> Result<XmlNode, SoapError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(element) => stack.push(XmlNode::named(local_name(&element))),
                Event::Empty(element) => {
                    attach(&mut stack, &mut root, XmlNode::named(local_name(&element)))
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let decoded = text
                            .decode()
                            .map_err(|err| SoapError::Encoding(err.to_string()))?;
                        current.text.push_str(&decoded);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::GeneralRef(reference) => {
                    if let Some(current) = stack.last_mut() {
                        let resolved = reference
                            .resolve_char_ref()
                            .map_err(|err| SoapError::Encoding(err.to_string()))?;
                        if let Some(ch) = resolved {
                            current.text.push(ch);
                        } else {
                            let name = reference
                                .decode()
                                .map_err(|err| SoapError::Encoding(err.to_string()))?;
                            if let Some(value) = quick_xml::escape::resolve_predefined_entity(&name)
                            {
                                current.text.push_str(value);
                            }
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or_else(|| SoapError::MissingElement("document root".to_string()))
    }

    /// Trimmed text content.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Depth-first search for `name`, starting with this node.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Text of a direct child, `None` when the child is missing or empty.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name)
            .map(XmlNode::text)
            .filter(|text| !text.is_empty())
    }

    pub fn require(&self, name: &str) -> Result<&XmlNode, SoapError> {
        self.child(name)
            .ok_or_else(|| SoapError::MissingElement(name.to_string()))
    }

    pub fn require_text(&self, name: &str) -> Result<&str, SoapError> {
        self.child_text(name)
            .ok_or_else(|| SoapError::MissingElement(name.to_string()))
    }
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

/// Parses a SOAP response and returns the first element inside `Body`.
///
/// A `Fault` in the body is returned as [`SoapError::Fault`].
pub fn parse_envelope_body(xml: &str) -> Result<XmlNode, SoapError> {
    let document = XmlNode::parse(xml)?;
    let body = document
        .find("Body")
        .ok_or_else(|| SoapError::MissingElement("Body".to_string()))?;

    if let Some(fault) = body.child("Fault") {
        return Err(SoapError::Fault {
            code: fault.child_text("faultcode").unwrap_or("unknown").to_string(),
            message: fault
                .child_text("faultstring")
                .unwrap_or_else(|| fault.text())
                .to_string(),
        });
    }

    body.children
        .first()
        .cloned()
        .ok_or_else(|| SoapError::MissingElement("Body content".to_string()))
}

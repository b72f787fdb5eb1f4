//! XMP XML parser
//!
//! This module turns XML bytes into an [`XmpNode`] tree. `quick-xml` emits
//! the raw events; an [`XmlEventSink`] consumes them. [`TreeBuilder`] is the
//! sink that assembles the element tree and captures the `x:xmpmeta` root.

use crate::core::error::{XmpError, XmpResult, MEMORY_LOCATION};
use crate::core::namespace::names;
use crate::core::node::{Attributes, XmpNode};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Receiver of XML parse events
pub trait XmlEventSink {
    /// An element was opened
    fn start_element(&mut self, name: &str, attributes: Attributes);

    /// Character data inside the currently open element
    ///
    /// Adjacent text, entity references and CDATA between two tags are
    /// delivered as one chunk. Whitespace-only chunks are not delivered.
    fn characters(&mut self, text: &str);

    /// The most recently opened element was closed
    fn end_element(&mut self, name: &str);
}

/// Builds an [`XmpNode`] tree from parse events
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<XmpNode>,
    xmpmeta: Option<XmpNode>,
    document: Option<XmpNode>,
}

impl TreeBuilder {
    /// Create a new tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements opened but not yet closed
    pub fn open_elements(&self) -> usize {
        self.stack.len()
    }

    /// Finish building and return the root
    ///
    /// This is the last closed `x:xmpmeta` element if there was one,
    /// otherwise the document element.
    pub fn finish(self) -> Option<XmpNode> {
        self.xmpmeta.or(self.document)
    }
}

impl XmlEventSink for TreeBuilder {
    fn start_element(&mut self, name: &str, attributes: Attributes) {
        self.stack
            .push(XmpNode::new(name).with_attributes(attributes));
    }

    fn characters(&mut self, text: &str) {
        if let Some(current) = self.stack.last_mut() {
            current.text = Some(text.to_string());
        }
    }

    fn end_element(&mut self, _name: &str) {
        let Some(node) = self.stack.pop() else {
            return;
        };

        if node.name() == names::XMPMETA {
            self.xmpmeta = Some(node);
        } else if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        } else {
            self.document = Some(node);
        }
    }
}

/// Parser for XMP documents
pub struct XmpParser {
    location: String,
}

impl XmpParser {
    /// Create a new XMP parser for in-memory input
    pub fn new() -> Self {
        Self {
            location: MEMORY_LOCATION.to_string(),
        }
    }

    /// Set the location reported in errors (usually the file path)
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Location reported in errors
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Parse XML bytes into a tree rooted at `x:xmpmeta`
    ///
    /// If the XML is well-formed but contains no `x:xmpmeta` element, the
    /// document element is returned instead and it is up to the caller to
    /// reject it.
    pub fn parse_bytes(&self, xml: &[u8]) -> XmpResult<XmpNode> {
        let mut builder = TreeBuilder::new();
        self.drive(xml, &mut builder)?;

        if builder.open_elements() > 0 {
            return Err(self.failure(format!(
                "unexpected end of input with {} unclosed element(s)",
                builder.open_elements()
            )));
        }

        builder
            .finish()
            .ok_or_else(|| self.failure("no root element found"))
    }

    /// Parse an XML string into a tree rooted at `x:xmpmeta`
    pub fn parse_str(&self, xml: &str) -> XmpResult<XmpNode> {
        self.parse_bytes(xml.as_bytes())
    }

    /// Feed the events of an XML document into a sink
    pub fn drive<S: XmlEventSink>(&self, xml: &[u8], sink: &mut S) -> XmpResult<()> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().expand_empty_elements = true;

        let mut buf = Vec::new();
        let mut pending_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    Self::flush_text(&mut pending_text, sink);
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let attributes = self.collect_attributes(&e)?;
                    sink.start_element(&name, attributes);
                }
                Ok(Event::End(e)) => {
                    Self::flush_text(&mut pending_text, sink);
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    sink.end_element(&name);
                }
                Ok(Event::Text(e)) => {
                    let raw_text = String::from_utf8_lossy(&e);
                    let unescaped = unescape(&raw_text)
                        .map_err(|err| self.failure(format!("invalid character data: {}", err)))?;
                    pending_text.push_str(&unescaped);
                }
                Ok(Event::CData(e)) => {
                    pending_text.push_str(&String::from_utf8_lossy(&e));
                }
                Ok(Event::GeneralRef(e)) => {
                    let reference = format!("&{};", String::from_utf8_lossy(&e));
                    let resolved = unescape(&reference).map_err(|err| {
                        self.failure(format!("unresolved reference {}: {}", reference, err))
                    })?;
                    pending_text.push_str(&resolved);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(self.failure(format!(
                        "XML parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )));
                }
                // Declarations, processing instructions (e.g. xpacket),
                // comments and DOCTYPE carry no metadata
                _ => {}
            }
            buf.clear();
        }

        Ok(())
    }

    /// Deliver accumulated character data unless it is whitespace only
    fn flush_text<S: XmlEventSink>(pending_text: &mut String, sink: &mut S) {
        if !pending_text.trim().is_empty() {
            sink.characters(pending_text);
        }
        pending_text.clear();
    }

    /// Collect attributes from an XML element, decoding entities in values
    fn collect_attributes(&self, e: &BytesStart<'_>) -> XmpResult<Attributes> {
        let mut attributes = Attributes::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.failure(format!("malformed attribute: {}", err)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let raw_value = String::from_utf8_lossy(attr.value.as_ref());
            let value = unescape(&raw_value)
                .map_err(|err| {
                    self.failure(format!("invalid value for attribute {}: {}", key, err))
                })?
                .to_string();
            attributes.set(key, value);
        }
        Ok(attributes)
    }

    fn failure(&self, message: impl Into<String>) -> XmpError {
        XmpError::failed_to_parse(&self.location, message)
    }
}

impl Default for XmpParser {
    fn default() -> Self {
        Self::new()
    }
}

//! XMP XML serializer
//!
//! This module provides functionality for writing an [`XmpNode`] tree back
//! to pretty-printed XML.

use crate::core::error::{XmpError, XmpResult};
use crate::core::node::XmpNode;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const PACKET_BEGIN: &str = "<?xpacket begin=\"\u{feff}\" id=\"W5M0MpCehiHzreSzNTczkc9d\"?>";
const PACKET_END: &str = r#"<?xpacket end="w"?>"#;

/// Serializer for XMP documents
#[derive(Debug, Clone)]
pub struct XmpSerializer {
    indent: usize,
    declaration: bool,
    packet_wrapper: bool,
}

impl XmpSerializer {
    /// Create a new serializer: 2-space indent, XML declaration, no packet
    /// wrapper
    pub fn new() -> Self {
        Self {
            indent: 2,
            declaration: true,
            packet_wrapper: false,
        }
    }

    /// Set the number of spaces per nesting level (0 disables pretty printing)
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Emit the `<?xml ...?>` declaration
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Wrap the document in `<?xpacket?>` processing instructions
    pub fn with_packet_wrapper(mut self, packet_wrapper: bool) -> Self {
        self.packet_wrapper = packet_wrapper;
        self
    }

    /// Serialize a tree to an XML string
    pub fn serialize_to_string(&self, root: &XmpNode) -> XmpResult<String> {
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(Cursor::new(Vec::new()), b' ', self.indent)
        } else {
            Writer::new(Cursor::new(Vec::new()))
        };

        self.serialize_node(&mut writer, root)?;

        let body = String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| XmpError::SerializationError(format!("UTF-8 encoding error: {}", e)))?;

        let mut lines = Vec::with_capacity(5);
        if self.declaration {
            lines.push(XML_DECLARATION);
        }
        if self.packet_wrapper {
            lines.push(PACKET_BEGIN);
        }
        lines.push(body.as_str());
        if self.packet_wrapper {
            lines.push(PACKET_END);
        }

        let mut xml = lines.join("\n");
        xml.push('\n');
        Ok(xml)
    }

    /// Serialize a tree to XML bytes
    pub fn serialize(&self, root: &XmpNode) -> XmpResult<Vec<u8>> {
        self.serialize_to_string(root).map(String::into_bytes)
    }

    /// Serialize one element and its subtree
    fn serialize_node(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        node: &XmpNode,
    ) -> XmpResult<()> {
        let mut start = BytesStart::new(node.name());
        for attribute in node.attributes.iter() {
            start.push_attribute(attribute);
        }

        // Childless elements without text are written self-closing
        if node.children.is_empty() && node.text.is_none() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &node.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            self.serialize_node(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(node.name())))?;

        Ok(())
    }
}

impl Default for XmpSerializer {
    fn default() -> Self {
        Self::new()
    }
}

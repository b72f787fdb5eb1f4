//! XMP documents
//!
//! An [`XmpDocument`] owns a parsed (or freshly built) `x:xmpmeta` tree that
//! is known to contain `rdf:RDF/rdf:Description`. It is the value that
//! carries parse results into a later save.

use crate::core::error::{XmpError, XmpResult, MEMORY_LOCATION};
use crate::core::metadata::{self, merge, DcField, XmpMetadata};
use crate::core::namespace::{
    names, DESCRIPTION_ATTRIBUTES, RDF_ATTRIBUTES, XMPMETA_ATTRIBUTES,
};
use crate::core::node::{Attributes, XmpNode};
use crate::core::parser::XmpParser;
use crate::core::serializer::XmpSerializer;
use std::str::FromStr;

/// A validated XMP document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmpDocument {
    root: XmpNode,
    location: String,
}

impl XmpDocument {
    /// Build a new minimal document from metadata
    ///
    /// The description carries the `xmp`, `pictureflow` and `dc` namespace
    /// declarations overlaid with `metadata.attributes`. Fields with empty
    /// text are left out.
    pub fn new(metadata: &XmpMetadata) -> Self {
        let mut description_attributes: Attributes =
            DESCRIPTION_ATTRIBUTES.into_iter().collect();
        for (name, value) in &metadata.attributes {
            description_attributes.set(name.as_str(), value.as_str());
        }

        let mut description =
            XmpNode::new(names::DESCRIPTION).with_attributes(description_attributes);
        for (field, value) in &metadata.dc_objects {
            if !value.is_empty() {
                description.push_child(metadata::alt_text_element(*field, value));
            }
        }

        let root = XmpNode::new(names::XMPMETA)
            .with_attributes(XMPMETA_ATTRIBUTES.into_iter().collect())
            .with_child(
                XmpNode::new(names::RDF)
                    .with_attributes(RDF_ATTRIBUTES.into_iter().collect())
                    .with_child(description),
            );

        Self {
            root,
            location: MEMORY_LOCATION.to_string(),
        }
    }

    /// Validate a parsed tree
    pub fn from_root(root: XmpNode, location: impl Into<String>) -> XmpResult<Self> {
        let location = location.into();
        metadata::description(&root, &location)?;
        Ok(Self { root, location })
    }

    /// Parse a document from XML bytes
    pub fn from_bytes(xml: &[u8]) -> XmpResult<Self> {
        Self::from_bytes_at(xml, MEMORY_LOCATION)
    }

    /// Parse a document from XML bytes, reporting `location` in errors
    pub fn from_bytes_at(xml: &[u8], location: &str) -> XmpResult<Self> {
        let root = XmpParser::new().with_location(location).parse_bytes(xml)?;
        Self::from_root(root, location)
    }

    /// Parse a document from an XML string
    pub fn parse_str(xml: &str) -> XmpResult<Self> {
        Self::from_bytes(xml.as_bytes())
    }

    /// Where the document was read from
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Set where the document is stored
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// The `x:xmpmeta` root
    pub fn root(&self) -> &XmpNode {
        &self.root
    }

    /// Consume the document and return its root
    pub fn into_root(self) -> XmpNode {
        self.root
    }

    /// The `rdf:Description` element
    pub fn description(&self) -> &XmpNode {
        // validated on construction; `apply` never removes the path
        self.root
            .descend(&metadata::DESCRIPTION_PATH)
            .unwrap_or(&self.root)
    }

    /// Extract the flat metadata
    pub fn metadata(&self) -> XmpMetadata {
        XmpMetadata::from_description(self.description())
    }

    /// Text of one Dublin Core field
    pub fn dc_object(&self, field: DcField) -> Option<&str> {
        metadata::alt_text_item(self.description(), field)?
            .text
            .as_deref()
    }

    /// Merge `updates` over the current metadata and write the result into
    /// the tree in place
    ///
    /// Returns the merged metadata.
    pub fn update(&mut self, updates: &XmpMetadata) -> XmpResult<XmpMetadata> {
        let merged = merge::merge(Some(&self.metadata()), updates);
        merge::apply(&mut self.root, &merged, &self.location)?;
        Ok(merged)
    }

    /// Serialize with the default serializer
    pub fn to_xml_bytes(&self) -> XmpResult<Vec<u8>> {
        XmpSerializer::default().serialize(&self.root)
    }

    /// Serialize with the default serializer
    pub fn to_xml_string(&self) -> XmpResult<String> {
        XmpSerializer::default().serialize_to_string(&self.root)
    }
}

impl FromStr for XmpDocument {
    type Err = XmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

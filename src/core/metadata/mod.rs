//! XMP Metadata
//!
//! This module provides the flat metadata view of an XMP document: the
//! attributes of the first `rdf:Description` and the `x-default` text of the
//! Dublin Core alt-text fields.

use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::{names, X_DEFAULT};
use crate::core::node::XmpNode;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub mod merge;

/// Path from the `x:xmpmeta` root to the description node
pub(crate) const DESCRIPTION_PATH: [&str; 2] = [names::RDF, names::DESCRIPTION];

/// Path from a field element to its localized text item
pub(crate) const ALT_TEXT_PATH: [&str; 2] = [names::ALT, names::LI];

/// Dublin Core fields stored as localized alt-text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DcField {
    /// `dc:title`
    #[cfg_attr(feature = "serde", serde(rename = "dc:title"))]
    Title,
    /// `dc:description`
    #[cfg_attr(feature = "serde", serde(rename = "dc:description"))]
    Description,
    /// `dc:rights`
    #[cfg_attr(feature = "serde", serde(rename = "dc:rights"))]
    Rights,
}

impl DcField {
    /// All fields, in the order they are written to new documents
    pub const ALL: [DcField; 3] = [DcField::Title, DcField::Description, DcField::Rights];

    /// Qualified element name of the field
    pub fn key(&self) -> &'static str {
        match self {
            DcField::Title => "dc:title",
            DcField::Description => "dc:description",
            DcField::Rights => "dc:rights",
        }
    }

    /// Look up a field by its qualified element name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for DcField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DcField {
    type Err = XmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| {
            XmpError::BadParam(format!(
                "Unknown Dublin Core field '{}', expected one of dc:title, dc:description, dc:rights",
                s
            ))
        })
    }
}

/// Flat metadata extracted from, or merged into, an XMP document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmpMetadata {
    /// Attributes of the `rdf:Description` element, e.g. `xmp:Rating`
    pub attributes: BTreeMap<String, String>,
    /// `x-default` text of the Dublin Core alt-text fields
    pub dc_objects: BTreeMap<DcField, String>,
}

impl XmpMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract metadata from an `x:xmpmeta` root
    ///
    /// Only the first `rdf:RDF`, the first `rdf:Description` and the first
    /// element of each field are consulted.
    pub fn from_root(root: &XmpNode, location: &str) -> XmpResult<Self> {
        let description = description(root, location)?;
        Ok(Self::from_description(description))
    }

    /// Extract metadata from an `rdf:Description` element
    pub fn from_description(description: &XmpNode) -> Self {
        let attributes = description
            .attributes
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        let dc_objects = DcField::ALL
            .into_iter()
            .filter_map(|field| {
                let text = alt_text_item(description, field)?.text.clone()?;
                Some((field, text))
            })
            .collect();

        Self {
            attributes,
            dc_objects,
        }
    }

    /// Split a flat key/value map into attributes and Dublin Core fields
    ///
    /// Keys naming a [`DcField`] become fields; every other key, including
    /// other `dc:` properties, is kept as an attribute.
    pub fn from_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut metadata = Self::new();
        for (key, value) in items {
            let key = key.into();
            match DcField::from_key(&key) {
                Some(field) => {
                    metadata.dc_objects.insert(field, value.into());
                }
                None => {
                    metadata.attributes.insert(key, value.into());
                }
            }
        }
        metadata
    }

    /// Flatten attributes and Dublin Core fields into one map
    pub fn to_items(&self) -> BTreeMap<String, String> {
        let mut items = self.attributes.clone();
        for (field, value) in &self.dc_objects {
            items.insert(field.key().to_string(), value.clone());
        }
        items
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get the text of a Dublin Core field
    pub fn dc_object(&self, field: DcField) -> Option<&str> {
        self.dc_objects.get(&field).map(String::as_str)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set the text of a Dublin Core field
    pub fn set_dc_object(&mut self, field: DcField, value: impl Into<String>) {
        self.dc_objects.insert(field, value.into());
    }

    /// Check if there are no attributes and no fields
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.dc_objects.is_empty()
    }
}

/// Locate the `rdf:Description` element of an `x:xmpmeta` root
pub(crate) fn description<'a>(root: &'a XmpNode, location: &str) -> XmpResult<&'a XmpNode> {
    if root.name() != names::XMPMETA {
        return Err(XmpError::invalid_xmp(
            location,
            format!(
                "root element is <{}>, expected <{}>",
                root.name(),
                names::XMPMETA
            ),
        ));
    }

    let rdf = root.first_child(names::RDF).ok_or_else(|| {
        XmpError::invalid_xmp(location, format!("missing <{}> element", names::RDF))
    })?;

    rdf.first_child(names::DESCRIPTION).ok_or_else(|| {
        XmpError::invalid_xmp(
            location,
            format!("missing <{}> element", names::DESCRIPTION),
        )
    })
}

/// The `rdf:li` item holding a field's text, if the field is present
pub(crate) fn alt_text_item(description: &XmpNode, field: DcField) -> Option<&XmpNode> {
    description
        .first_child(field.key())?
        .descend(&ALT_TEXT_PATH)
}

/// Build `<field><rdf:Alt><rdf:li xml:lang="x-default">value</rdf:li></rdf:Alt></field>`
pub(crate) fn alt_text_element(field: DcField, value: &str) -> XmpNode {
    let li = XmpNode::new(names::LI)
        .with_attributes([(names::XML_LANG, X_DEFAULT)].into_iter().collect())
        .with_text(value);
    XmpNode::new(field.key()).with_child(XmpNode::new(names::ALT).with_child(li))
}

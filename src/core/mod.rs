//! XMP Core module
//!
//! This module contains the core functionality for XMP sidecar processing:
//! the element tree, parsing, metadata extraction and merging, and
//! serialization.

pub mod document;
pub mod error;
pub mod metadata;
pub mod namespace;
pub mod node;
pub mod parser;
pub mod serializer;

pub use document::XmpDocument;
pub use error::{XmpError, XmpResult};
pub use metadata::{DcField, XmpMetadata};
pub use namespace::ns;
pub use node::{Attributes, XmpNode};
pub use parser::{TreeBuilder, XmlEventSink, XmpParser};
pub use serializer::XmpSerializer;

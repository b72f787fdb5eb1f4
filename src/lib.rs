//! # xmp-sidecar
//!
//! Read, merge and write XMP sidecar metadata.
//!
//! The crate reads the attributes of the first `rdf:Description` of an XMP
//! document together with the `x-default` text of the Dublin Core fields
//! `dc:title`, `dc:description` and `dc:rights`, and writes new values back
//! either by updating the existing document in place or by building a new
//! minimal document.
//!
//! ## Example
//!
//! ```rust,no_run
//! use xmp_sidecar::{read_xmp, save_xmp, DcField, XmpMetadata};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut updates = XmpMetadata::new();
//! updates.set_attribute("xmp:Rating", "4");
//! updates.set_dc_object(DcField::Title, "Harbour at dusk");
//! save_xmp("photo.xmp", &updates)?;
//!
//! let metadata = read_xmp("photo.xmp")?;
//! assert_eq!(metadata.attribute("xmp:Rating"), Some("4"));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod files;

pub use crate::core::{
    DcField, XmlEventSink, XmpDocument, XmpError, XmpMetadata, XmpNode, XmpParser, XmpResult,
    XmpSerializer,
};
pub use files::{read_xmp, save_xmp, XmpFile};

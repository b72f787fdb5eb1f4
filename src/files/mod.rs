//! File operations
//!
//! Reading and saving XMP sidecar files on disk.

pub mod file;

pub use file::XmpFile;

use crate::core::error::XmpResult;
use crate::core::metadata::XmpMetadata;
use std::path::Path;

/// Read the metadata of an XMP sidecar
///
/// # Errors
///
/// - [`XmpError::FailedToParse`](crate::XmpError::FailedToParse) if the file
///   is missing, unreadable, empty or not well-formed XML
/// - [`XmpError::InvalidXmp`](crate::XmpError::InvalidXmp) if it is XML but
///   not shaped like `x:xmpmeta/rdf:RDF/rdf:Description`
pub fn read_xmp<P: AsRef<Path>>(path: P) -> XmpResult<XmpMetadata> {
    Ok(XmpFile::open(path)?.metadata())
}

/// Merge `updates` into the XMP sidecar at `path` and write it
///
/// If the file exists and is valid XMP, its tree is updated in place and
/// everything not named in `updates` is kept. Otherwise (missing file,
/// malformed or non-XMP content) a new document is built from `updates`
/// alone. Only write failures are returned.
pub fn save_xmp<P: AsRef<Path>>(path: P, updates: &XmpMetadata) -> XmpResult<()> {
    let mut file = XmpFile::open_or_new(path);
    file.update(updates)?;
    file.save()
}

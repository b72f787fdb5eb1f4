//! XMP sidecar file API
//!
//! [`XmpFile`] scopes one read-modify-write sequence on a sidecar path: the
//! tree parsed by [`XmpFile::open`] or [`XmpFile::open_or_new`] is the one
//! that [`XmpFile::update`] mutates and [`XmpFile::save`] writes.

use crate::core::document::XmpDocument;
use crate::core::error::{XmpError, XmpResult};
use crate::core::metadata::XmpMetadata;
use std::fs;
use std::path::{Path, PathBuf};

/// An XMP sidecar file
///
/// # Example
///
/// ```rust,no_run
/// use xmp_sidecar::{DcField, XmpFile, XmpMetadata};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut file = XmpFile::open_or_new("photo.xmp");
///
/// let mut updates = XmpMetadata::new();
/// updates.set_attribute("xmp:Rating", "5");
/// updates.set_dc_object(DcField::Title, "Harbour at dusk");
/// file.update(&updates)?;
///
/// file.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XmpFile {
    path: PathBuf,
    document: Option<XmpDocument>,
}

impl XmpFile {
    /// Read and parse an existing sidecar
    ///
    /// Fails with [`XmpError::FailedToParse`] if the file cannot be read or
    /// is not well-formed XML, and with [`XmpError::InvalidXmp`] if it is
    /// not an XMP document.
    pub fn open<P: AsRef<Path>>(path: P) -> XmpResult<Self> {
        let path = path.as_ref();
        let location = path.display().to_string();

        let data = fs::read(path)
            .map_err(|e| XmpError::failed_to_parse(&location, format!("cannot read file: {}", e)))?;
        let document = XmpDocument::from_bytes_at(&data, &location)?;

        Ok(Self {
            path: path.to_path_buf(),
            document: Some(document),
        })
    }

    /// Open a sidecar for saving, treating a missing or invalid file as empty
    ///
    /// Parse failures are logged and otherwise ignored; the file will be
    /// rebuilt from scratch on [`XmpFile::save`].
    pub fn open_or_new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("No XMP file at {}, a new one will be created", path.display());
            return Self::new(path);
        }

        match Self::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Ignoring existing content of {}: {}", path.display(), e);
                Self::new(path)
            }
        }
    }

    /// A sidecar with no prior content
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            document: None,
        }
    }

    /// Path of the sidecar
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed or built document, if any
    pub fn document(&self) -> Option<&XmpDocument> {
        self.document.as_ref()
    }

    /// Consume the file and return its document
    pub fn into_document(self) -> Option<XmpDocument> {
        self.document
    }

    /// Current metadata (empty if there is no document yet)
    pub fn metadata(&self) -> XmpMetadata {
        self.document
            .as_ref()
            .map(XmpDocument::metadata)
            .unwrap_or_default()
    }

    /// Merge `updates` into the sidecar
    ///
    /// With a prior document the tree is updated in place; otherwise a new
    /// document is built from `updates` alone. Returns the merged metadata.
    pub fn update(&mut self, updates: &XmpMetadata) -> XmpResult<XmpMetadata> {
        match self.document.as_mut() {
            Some(document) => {
                log::debug!("Updating XMP document for {} in place", self.path.display());
                document.update(updates)
            }
            None => {
                log::debug!("Building new XMP document for {}", self.path.display());
                let mut document = XmpDocument::new(updates);
                document.set_location(self.path.display().to_string());
                self.document = Some(document);
                Ok(updates.clone())
            }
        }
    }

    /// Write the document to the sidecar path, replacing the file
    pub fn save(&self) -> XmpResult<()> {
        let bytes = match &self.document {
            Some(document) => document.to_xml_bytes()?,
            None => XmpDocument::new(&XmpMetadata::new()).to_xml_bytes()?,
        };

        fs::write(&self.path, bytes).map_err(|e| {
            log::error!("Failed to write XMP to {}: {}", self.path.display(), e);
            XmpError::IoError(e)
        })
    }
}

//! Error types for XMP operations
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Location label used for documents parsed from memory
pub const MEMORY_LOCATION: &str = "<memory>";

/// Error types for XMP operations
#[derive(Debug, Error)]
pub enum XmpError {
    /// The XML did not yield a root element (malformed input, empty input,
    /// unreadable file)
    #[error("Failed to parse XMP from {location}: {message}")]
    FailedToParse {
        /// File path or [`MEMORY_LOCATION`]
        location: String,
        /// Human-readable cause
        message: String,
    },

    /// A root element was found but the document is not shaped like
    /// `x:xmpmeta/rdf:RDF/rdf:Description`
    #[error("Content of '{location}' does not conform to the XMP format: {message}")]
    InvalidXmp {
        /// File path or [`MEMORY_LOCATION`]
        location: String,
        /// Human-readable cause
        message: String,
    },

    /// Bad parameter provided to a function
    #[error("Bad parameter: {0}")]
    BadParam(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl XmpError {
    pub(crate) fn failed_to_parse(location: &str, message: impl Into<String>) -> Self {
        XmpError::FailedToParse {
            location: location.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_xmp(location: &str, message: impl Into<String>) -> Self {
        XmpError::InvalidXmp {
            location: location.to_string(),
            message: message.into(),
        }
    }

    /// Location (file path or [`MEMORY_LOCATION`]) of a parse error
    pub fn location(&self) -> Option<&str> {
        match self {
            XmpError::FailedToParse { location, .. } | XmpError::InvalidXmp { location, .. } => {
                Some(location)
            }
            _ => None,
        }
    }
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;

//! Namespaces and qualified names used in XMP sidecars
//!
//! Documents are handled by qualified name (`prefix:local`), so this module
//! only carries the URIs needed to declare prefixes in freshly built
//! documents, plus the element and attribute names the navigator looks for.

/// Built-in XMP namespaces
pub mod ns {
    /// Adobe meta namespace (the `x:xmpmeta` wrapper)
    pub const ADOBE_META: &str = "adobe:ns:meta/";
    /// XMP Basic namespace
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";
    /// Dublin Core namespace
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// Pictureflow application namespace
    pub const PICTUREFLOW: &str = "https://ns.pictureflow.app/1.0/";
}

/// Qualified element and attribute names
pub mod names {
    /// Root element of an XMP document
    pub const XMPMETA: &str = "x:xmpmeta";
    /// RDF container element
    pub const RDF: &str = "rdf:RDF";
    /// RDF description element holding the properties
    pub const DESCRIPTION: &str = "rdf:Description";
    /// Alternative array element
    pub const ALT: &str = "rdf:Alt";
    /// Array item element
    pub const LI: &str = "rdf:li";
    /// Toolkit attribute on `x:xmpmeta`
    pub const XMPTK: &str = "x:xmptk";
    /// Language qualifier attribute
    pub const XML_LANG: &str = "xml:lang";
    /// Dublin Core prefix declaration
    pub const XMLNS_DC: &str = "xmlns:dc";
}

/// Toolkit string written into freshly built documents
pub const XMP_TOOLKIT: &str = "XMP Core 5.6.0";

/// Default language of localized text items
pub const X_DEFAULT: &str = "x-default";

/// Attributes of a fresh `x:xmpmeta` element, in output order
pub const XMPMETA_ATTRIBUTES: [(&str, &str); 2] =
    [("xmlns:x", ns::ADOBE_META), (names::XMPTK, XMP_TOOLKIT)];

/// Attributes of a fresh `rdf:RDF` element
pub const RDF_ATTRIBUTES: [(&str, &str); 1] = [("xmlns:rdf", ns::RDF)];

/// Namespace declarations of a fresh `rdf:Description` element, in output order
pub const DESCRIPTION_ATTRIBUTES: [(&str, &str); 3] = [
    ("xmlns:xmp", ns::XMP),
    ("xmlns:pictureflow", ns::PICTUREFLOW),
    (names::XMLNS_DC, ns::DC),
];

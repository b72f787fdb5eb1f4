//! Tests for the in-memory document API
//!
//! These tests exercise parsing, metadata extraction, merging and
//! serialization without touching the filesystem.

use xmp_sidecar::XmpDocument;

#[test]
fn new_empty() {
    let doc = XmpDocument::new(&Default::default());
    assert!(doc.metadata().dc_objects.is_empty());
    // only the namespace declarations are present
    assert_eq!(doc.metadata().attributes.len(), 3);
}

mod from_str {
    use pretty_assertions::assert_eq;
    use xmp_sidecar::{DcField, XmpDocument, XmpError};

    const LIGHTROOM_XMP: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="Adobe XMP Core 5.6-c140 79.160451, 2017/05/06-01:08:21">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:xmp="http://ns.adobe.com/xap/1.0/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
   xmp:CreatorTool="Adobe Photoshop Lightroom Classic 7.3.1 (Macintosh)"
   xmp:Rating="4">
   <dc:rights>
    <rdf:Alt>
     <rdf:li xml:lang="x-default">&#169; Someone</rdf:li>
    </rdf:Alt>
   </dc:rights>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

    #[test]
    fn happy_path() {
        let doc = LIGHTROOM_XMP.parse::<XmpDocument>().unwrap();
        let metadata = doc.metadata();

        assert_eq!(
            metadata.attribute("xmp:CreatorTool"),
            Some("Adobe Photoshop Lightroom Classic 7.3.1 (Macintosh)")
        );
        assert_eq!(metadata.attribute("xmp:Rating"), Some("4"));
        assert_eq!(metadata.dc_object(DcField::Rights), Some("© Someone"));
        assert_eq!(doc.location(), "<memory>");
    }

    #[test]
    fn invalid_xml() {
        let result = "not valid xml".parse::<XmpDocument>();
        assert!(matches!(result, Err(XmpError::FailedToParse { .. })));
    }

    #[test]
    fn rdf_without_xmpmeta() {
        let result = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""/>
</rdf:RDF>"#
            .parse::<XmpDocument>();
        assert!(matches!(result, Err(XmpError::InvalidXmp { .. })));
    }

    #[test]
    fn missing_description() {
        let result = "<x:xmpmeta><rdf:RDF/></x:xmpmeta>".parse::<XmpDocument>();
        let err = result.unwrap_err();
        assert!(matches!(err, XmpError::InvalidXmp { .. }));
        assert!(err.to_string().contains("rdf:Description"));
    }
}

mod update {
    use pretty_assertions::assert_eq;
    use xmp_sidecar::{DcField, XmpDocument, XmpMetadata};

    const EXISTING: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmp:Rating="2">
      <dc:title>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">Old</rdf:li>
          <rdf:li xml:lang="nl-NL">Oud</rdf:li>
        </rdf:Alt>
      </dc:title>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

    #[test]
    fn only_the_first_alternative_is_replaced() {
        let mut doc = XmpDocument::parse_str(EXISTING).unwrap();
        let mut updates = XmpMetadata::new();
        updates.set_dc_object(DcField::Title, "New");
        doc.update(&updates).unwrap();

        let xml = doc.to_xml_string().unwrap();
        assert!(xml.contains(r#"<rdf:li xml:lang="x-default">New</rdf:li>"#));
        assert!(xml.contains(r#"<rdf:li xml:lang="nl-NL">Oud</rdf:li>"#));
    }

    #[test]
    fn new_field_declares_dc_namespace() {
        let mut doc = XmpDocument::parse_str(EXISTING).unwrap();
        let mut updates = XmpMetadata::new();
        updates.set_dc_object(DcField::Description, "Added");
        doc.update(&updates).unwrap();

        let reparsed = XmpDocument::parse_str(&doc.to_xml_string().unwrap()).unwrap();
        let metadata = reparsed.metadata();
        assert_eq!(metadata.dc_object(DcField::Description), Some("Added"));
        assert_eq!(metadata.dc_object(DcField::Title), Some("Old"));
        assert_eq!(
            metadata.attribute("xmlns:dc"),
            Some("http://purl.org/dc/elements/1.1/")
        );
    }

    #[test]
    fn empty_value_on_existing_document_is_written() {
        let mut doc = XmpDocument::parse_str(EXISTING).unwrap();
        let mut updates = XmpMetadata::new();
        updates.set_dc_object(DcField::Title, "");
        doc.update(&updates).unwrap();

        // the element stays, its text is cleared
        let reparsed = XmpDocument::parse_str(&doc.to_xml_string().unwrap()).unwrap();
        assert_eq!(reparsed.dc_object(DcField::Title), None);
        assert!(reparsed.description().first_child("dc:title").is_some());
    }
}

mod serialize {
    use xmp_sidecar::{XmpDocument, XmpMetadata, XmpSerializer};

    #[test]
    fn fresh_document_layout() {
        let metadata = XmpMetadata::from_items([("xmp:Rating", "2"), ("dc:title", "Title")]);
        let xml = XmpDocument::new(&metadata).to_xml_string().unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="XMP Core 5.6.0">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmlns:pictureflow="https://ns.pictureflow.app/1.0/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmp:Rating="2">
      <dc:title>
        <rdf:Alt>
          <rdf:li xml:lang="x-default">Title</rdf:li>
        </rdf:Alt>
      </dc:title>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
"#;
        pretty_assertions::assert_eq!(xml, expected);
    }

    #[test]
    fn packet_wrapped_output_parses() {
        let doc = XmpDocument::new(&XmpMetadata::from_items([("xmp:Label", "Red")]));
        let xml = XmpSerializer::new()
            .with_packet_wrapper(true)
            .serialize_to_string(doc.root())
            .unwrap();

        assert!(xml.starts_with("<?xml"));
        let reparsed = XmpDocument::parse_str(&xml).unwrap();
        assert_eq!(reparsed.metadata(), doc.metadata());
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use xmp_sidecar::{DcField, XmpMetadata};

    #[test]
    fn metadata_to_json() {
        let mut metadata = XmpMetadata::new();
        metadata.set_attribute("xmp:Rating", "3");
        metadata.set_dc_object(DcField::Title, "Title");

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(
            json,
            r#"{"attributes":{"xmp:Rating":"3"},"dc_objects":{"dc:title":"Title"}}"#
        );

        let back: XmpMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }
}

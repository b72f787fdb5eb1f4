//! Merging new metadata into existing metadata and documents

use super::{alt_text_element, XmpMetadata, ALT_TEXT_PATH, DESCRIPTION_PATH};
use crate::core::error::{XmpError, XmpResult};
use crate::core::namespace::{names, ns};
use crate::core::node::XmpNode;

/// Merge `updates` over `prior`
///
/// Every key in `updates` replaces the same key in `prior`; all other prior
/// keys are kept. Without prior metadata the result is `updates` itself.
pub fn merge(prior: Option<&XmpMetadata>, updates: &XmpMetadata) -> XmpMetadata {
    let Some(prior) = prior else {
        return updates.clone();
    };

    let mut merged = prior.clone();
    merged.attributes.extend(
        updates
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
    merged
        .dc_objects
        .extend(updates.dc_objects.iter().map(|(field, value)| (*field, value.clone())));
    merged
}

/// Write merged metadata into an existing `x:xmpmeta` tree in place
///
/// The description's attributes are replaced by `merged.attributes`.
/// Existing fields get only their `rdf:li` text replaced; missing fields are
/// appended as new `rdf:Alt` subtrees.
pub fn apply(root: &mut XmpNode, merged: &XmpMetadata, location: &str) -> XmpResult<()> {
    let dc_declared_above = root.attributes.contains(names::XMLNS_DC)
        || root
            .first_child(names::RDF)
            .is_some_and(|rdf| rdf.attributes.contains(names::XMLNS_DC));

    let description = root.descend_mut(&DESCRIPTION_PATH).ok_or_else(|| {
        XmpError::invalid_xmp(
            location,
            format!("missing <{}> element", names::DESCRIPTION),
        )
    })?;

    description.attributes.replace_all(
        merged
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );

    let mut appended = false;
    for (field, value) in &merged.dc_objects {
        let existing = description
            .first_child_mut(field.key())
            .and_then(|element| element.descend_mut(&ALT_TEXT_PATH));

        match existing {
            Some(li) => li.text = Some(value.clone()),
            None => {
                description.push_child(alt_text_element(*field, value));
                appended = true;
            }
        }
    }

    if appended && !dc_declared_above && !description.attributes.contains(names::XMLNS_DC) {
        description.attributes.set(names::XMLNS_DC, ns::DC);
    }

    Ok(())
}

//! XMP tree node
//!
//! This module defines the generic element tree the parser builds and the
//! serializer writes:
//! - XmpNode: one XML element with a name, optional text, ordered
//!   attributes and owned children
//! - Attributes: an insertion-ordered attribute list with map semantics

/// Ordered attribute list of an element
///
/// Behaves like a map keyed by qualified attribute name, but keeps
/// insertion order so documents are written back the way they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute list
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if an attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Set an attribute, replacing the value in place if it already exists
    ///
    /// Returns the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Remove an attribute
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Replace every attribute with the given entries
    ///
    /// Names that were already present keep their position, names that are
    /// not in `entries` are dropped and new names are appended.
    pub fn replace_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut incoming = Attributes::new();
        for (name, value) in entries {
            incoming.set(name, value);
        }

        self.entries.retain(|(key, _)| incoming.contains(key));
        for (name, value) in incoming.entries {
            self.set(name, value);
        }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// One element of an XMP document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmpNode {
    name: String,
    /// Character data of the element
    pub text: Option<String>,
    /// Attributes of the element
    pub attributes: Attributes,
    /// Child elements in document order
    pub children: Vec<XmpNode>,
}

impl XmpNode {
    /// Create a new element with no text, attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set the attributes
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder: set the text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: XmpNode) -> Self {
        self.children.push(child);
        self
    }

    /// Qualified name of the element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child element
    pub fn push_child(&mut self, child: XmpNode) {
        self.children.push(child);
    }

    /// All direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmpNode> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First direct child with the given name
    pub fn first_child(&self, name: &str) -> Option<&XmpNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// First direct child with the given name, mutably
    pub fn first_child_mut(&mut self, name: &str) -> Option<&mut XmpNode> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Follow a path of names, taking the first matching child at each step
    ///
    /// An empty path returns `self`.
    pub fn descend(&self, path: &[&str]) -> Option<&XmpNode> {
        path.iter()
            .try_fold(self, |node, name| node.first_child(name))
    }

    /// Follow a path of names mutably, taking the first match at each step
    pub fn descend_mut(&mut self, path: &[&str]) -> Option<&mut XmpNode> {
        path.iter()
            .try_fold(self, |node, name| node.first_child_mut(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(text: &str) -> XmpNode {
        XmpNode::new("rdf:Alt").with_child(XmpNode::new("rdf:li").with_text(text))
    }

    #[test]
    fn test_attributes_keep_order() {
        let mut attrs = Attributes::new();
        attrs.set("b", "1");
        attrs.set("a", "2");
        assert_eq!(attrs.set("b", "3"), Some("1".to_string()));

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, [("b", "3"), ("a", "2")]);
        assert_eq!(attrs.get("a"), Some("2"));
        assert_eq!(attrs.get("c"), None);
    }

    #[test]
    fn test_attributes_replace_all() {
        let mut attrs: Attributes = [("xmlns:xmp", "uri"), ("xmp:Rating", "1"), ("old", "x")]
            .into_iter()
            .collect();
        attrs.replace_all([("new", "y"), ("xmp:Rating", "5"), ("xmlns:xmp", "uri")]);

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            [("xmlns:xmp", "uri"), ("xmp:Rating", "5"), ("new", "y")]
        );
        assert_eq!(attrs.remove("new"), Some("y".to_string()));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_children_named_returns_all_matches() {
        let node = XmpNode::new("rdf:RDF")
            .with_child(XmpNode::new("rdf:Description").with_text("first"))
            .with_child(XmpNode::new("other"))
            .with_child(XmpNode::new("rdf:Description").with_text("second"));

        let texts: Vec<_> = node
            .children_named("rdf:Description")
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(
            node.first_child("rdf:Description").and_then(|n| n.text.as_deref()),
            Some("first")
        );
        assert!(node.first_child("missing").is_none());
    }

    #[test]
    fn test_descend() {
        let mut node = XmpNode::new("dc:title").with_child(alt("Title"));

        let li = node.descend(&["rdf:Alt", "rdf:li"]).unwrap();
        assert_eq!(li.text.as_deref(), Some("Title"));
        assert!(node.descend(&["rdf:Alt", "rdf:Seq"]).is_none());
        assert_eq!(node.descend(&[]).map(XmpNode::name), Some("dc:title"));

        node.descend_mut(&["rdf:Alt", "rdf:li"]).unwrap().text = Some("New".into());
        assert_eq!(
            node.descend(&["rdf:Alt", "rdf:li"]).and_then(|n| n.text.as_deref()),
            Some("New")
        );
    }
}

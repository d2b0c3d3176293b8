//! XML sample importer.
//!
//! Walks a sample document tree, groups element nodes by tag name (flat
//! mode) or by dotted tag path (hierarchical mode) and runs one element
//! inference per group.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use tracing::info;

use super::ImportError;
use super::node::{XmlNode, parse_document};
use crate::models::{Document, Element, XmlHeader};

/// Imports sample XML into an inferred [`Document`].
#[derive(Debug, Clone)]
pub struct XmlImporter {
    /// Key groups by full ancestor tag path instead of bare tag name,
    /// keeping same-named tags under different parents distinct.
    pub preserve_hierarchy: bool,
    /// Treat tag and attribute names case-sensitively.
    pub case_sensitive: bool,
}

impl Default for XmlImporter {
    fn default() -> Self {
        Self {
            preserve_hierarchy: false,
            case_sensitive: true,
        }
    }
}

impl XmlImporter {
    pub fn new(preserve_hierarchy: bool, case_sensitive: bool) -> Self {
        Self {
            preserve_hierarchy,
            case_sensitive,
        }
    }

    /// Reads and imports a sample document from disk.
    pub fn import_path(&self, path: impl AsRef<Path>) -> Result<Document, ImportError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.import_str(&content)
    }

    /// Imports a sample document from XML text.
    ///
    /// # Arguments
    ///
    /// * `content` - The sample XML document as a string.
    ///
    /// # Returns
    ///
    /// The inferred [`Document`], or an [`ImportError`] if the input is
    /// not well-formed XML or has no root element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xml_modelling_sdk::import::XmlImporter;
    ///
    /// let doc = XmlImporter::default()
    ///     .import_str(r#"<Root><Item id="1"/></Root>"#)
    ///     .unwrap();
    /// assert_eq!(doc.root_key(), "Root");
    /// ```
    pub fn import_str(&self, content: &str) -> Result<Document, ImportError> {
        let (header, root) = parse_document(content)?;
        Ok(self.import_tree(header, &root))
    }

    /// Imports an already-parsed node tree, e.g. one built by a
    /// collaborator instead of [`parse_document`].
    pub fn import_tree(&self, header: XmlHeader, root: &XmlNode) -> Document {
        let mut groups: BTreeMap<String, Vec<&XmlNode>> = BTreeMap::new();
        let mut children_of: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let root_key = self.key_for(&root.name, None);
        self.collect(root, &root_key, &mut groups, &mut children_of);

        let mut elements = BTreeMap::new();
        for (key, corpus) in &groups {
            let mut element = Element::infer(key, corpus, self.case_sensitive);
            let children: Vec<String> = children_of
                .get(key)
                .map(|keys| keys.iter().cloned().collect())
                .unwrap_or_default();
            element.set_children(children);
            elements.insert(key.clone(), element);
        }

        info!(
            elements = elements.len(),
            root = %root_key,
            hierarchical = self.preserve_hierarchy,
            "inferred document"
        );
        Document::new(
            header,
            elements,
            root_key,
            self.preserve_hierarchy,
            self.case_sensitive,
        )
    }

    fn collect<'a>(
        &self,
        node: &'a XmlNode,
        key: &str,
        groups: &mut BTreeMap<String, Vec<&'a XmlNode>>,
        children_of: &mut BTreeMap<String, BTreeSet<String>>,
    ) {
        groups.entry(key.to_string()).or_default().push(node);
        for child in &node.children {
            let child_key = self.key_for(&child.name, Some(key));
            children_of
                .entry(key.to_string())
                .or_default()
                .insert(child_key.clone());
            self.collect(child, &child_key, groups, children_of);
        }
    }

    fn key_for(&self, tag: &str, parent_key: Option<&str>) -> String {
        let folded = if self.case_sensitive {
            tag.to_string()
        } else {
            tag.to_lowercase()
        };
        match (self.preserve_hierarchy, parent_key) {
            (true, Some(parent)) => format!("{parent}.{folded}"),
            _ => folded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NESTED: &str = r#"
        <Shop>
            <Item id="1" price="9.99"/>
            <Bundle>
                <Item code="a"/>
            </Bundle>
        </Shop>"#;

    #[test]
    fn flat_mode_merges_same_named_tags() {
        let doc = XmlImporter::default().import_str(NESTED).unwrap();
        assert_eq!(doc.root_key(), "Shop");

        let item = doc.element("Item").unwrap();
        let names: Vec<&str> = item.attributes().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["code", "id", "price"]);
        // Attributes not shared by both occurrences become optional.
        assert!(item.attributes().iter().all(|f| f.is_optional()));
    }

    #[test]
    fn hierarchical_mode_keeps_same_named_tags_distinct() {
        let doc = XmlImporter::new(true, true).import_str(NESTED).unwrap();
        assert_eq!(doc.root_key(), "Shop");

        let top = doc.element("Shop.Item").unwrap();
        let names: Vec<&str> = top.attributes().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["id", "price"]);
        assert!(top.attributes().iter().all(|f| !f.is_optional()));

        let nested = doc.element("Shop.Bundle.Item").unwrap();
        let names: Vec<&str> = nested.attributes().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["code"]);
    }

    #[test]
    fn children_are_wired_and_sorted() {
        let xml = "<r><b/><a/><b/></r>";
        let doc = XmlImporter::default().import_str(xml).unwrap();
        assert_eq!(doc.root_element().children(), &["a".to_string(), "b".to_string()]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn case_insensitive_mode_folds_tag_names() {
        let xml = r#"<r><Item a="1"/><ITEM b="2"/></r>"#;
        let doc = XmlImporter::new(false, false).import_str(xml).unwrap();
        let item = doc.element("item").unwrap();
        assert_eq!(item.attributes().len(), 2);
        assert_eq!(doc.root_element().children(), &["item".to_string()]);
    }

    #[test]
    fn header_is_carried_through() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?><r/>"#;
        let doc = XmlImporter::default().import_str(xml).unwrap();
        assert_eq!(doc.header().version.as_deref(), Some("1.0"));
        assert_eq!(doc.header().encoding.as_deref(), Some("utf-8"));
    }

    #[test]
    fn io_failure_is_reported_with_path() {
        let err = XmlImporter::default()
            .import_path("/no/such/sample.xml")
            .unwrap_err();
        match err {
            ImportError::Io { path, .. } => assert!(path.contains("sample.xml")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

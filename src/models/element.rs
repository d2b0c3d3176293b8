//! Element model: the aggregated schema for one XML tag name.

use std::collections::BTreeMap;

use super::field::Field;
use super::naming;
use crate::import::XmlNode;

/// Inference result for all sample nodes sharing one tag name (or tag
/// path, in hierarchical mode).
///
/// Invariant: no two fields (attributes, text, CDATA) share a
/// `property_name`, and none equals `class_name`. The invariant is
/// restored wholesale by [`Element::rename_field`]: a rename re-runs
/// the element's entire naming pass rather than patching incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    key: String,
    class_name: String,
    attributes: Vec<Field>,
    text: Option<Field>,
    cdata: Option<Field>,
    children: Vec<String>,
}

impl Element {
    /// Infers an element over a corpus of same-named nodes.
    ///
    /// `key` is the document-table key this element is stored under
    /// (bare tag name in flat mode, dotted path in hierarchical mode).
    /// Child keys are wired separately by the importer.
    ///
    /// # Panics
    ///
    /// Panics if the corpus is empty or mixes tag names (compared
    /// case-insensitively when `case_sensitive` is off).
    pub fn infer(key: &str, corpus: &[&XmlNode], case_sensitive: bool) -> Self {
        assert!(!corpus.is_empty(), "element corpus must not be empty");
        let tag = corpus[0].name.as_str();
        assert!(
            corpus.iter().all(|n| if case_sensitive {
                n.name == tag
            } else {
                n.name.eq_ignore_ascii_case(tag)
            }),
            "element corpus must share one tag name, found '{tag}' mixed with others"
        );

        // Union of attribute names over the corpus, alphabetical; the
        // sort key is case-folded when names are folded.
        let mut attribute_names: BTreeMap<String, String> = BTreeMap::new();
        for node in corpus {
            for (attr, _) in &node.attributes {
                let sort_key = if case_sensitive {
                    attr.clone()
                } else {
                    attr.to_lowercase()
                };
                attribute_names.entry(sort_key).or_insert_with(|| attr.clone());
            }
        }

        let attributes = attribute_names
            .values()
            .map(|attr| Field::infer_attribute(attr, corpus, case_sensitive))
            .collect();

        let text = Some(Field::infer_text(corpus)).filter(|f| !f.possible_values().is_empty());
        let cdata = Some(Field::infer_cdata(corpus)).filter(|f| !f.possible_values().is_empty());

        let mut element = Self {
            name: tag.to_string(),
            key: key.to_string(),
            class_name: naming::pascal_case(tag),
            attributes,
            text,
            cdata,
            children: Vec::new(),
        };
        element.resolve_property_names();
        element
    }

    /// XML tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document-table key ("Parent.Child" path in hierarchical mode).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Generated type name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Attribute fields in resolved (alphabetical) order.
    pub fn attributes(&self) -> &[Field] {
        &self.attributes
    }

    /// The synthetic text field, if any node carried non-empty text.
    pub fn text(&self) -> Option<&Field> {
        self.text.as_ref()
    }

    /// The synthetic CDATA field, if any node carried non-empty CDATA.
    pub fn cdata(&self) -> Option<&Field> {
        self.cdata.as_ref()
    }

    /// Child-element keys, alphabetical.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub(crate) fn set_children(&mut self, children: Vec<String>) {
        self.children = children;
    }

    /// All fields in projection order: text, CDATA, then attributes.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.text
            .iter()
            .chain(self.cdata.iter())
            .chain(self.attributes.iter())
    }

    /// Looks up a field by its XML name (`Text`/`CDATA` for the
    /// synthetic fields).
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|f| f.name() == name)
    }

    /// Mutable field lookup for type/optionality edits.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.text
            .iter_mut()
            .chain(self.cdata.iter_mut())
            .chain(self.attributes.iter_mut())
            .find(|f| f.name() == name)
    }

    /// Renames a field's property and re-runs the element's whole naming
    /// pass, so collision suffixes stay deterministic.
    ///
    /// # Panics
    ///
    /// Panics if no field with XML name `field_name` exists.
    pub fn rename_field(&mut self, field_name: &str, new_property_name: &str) {
        let field = self
            .field_mut(field_name)
            .unwrap_or_else(|| panic!("unknown field '{field_name}'"));
        field.set_base_property_name(new_property_name);
        self.resolve_property_names();
    }

    /// Full collision-resolution pass over every field's requested
    /// (base) property name, in the fixed order:
    ///
    /// a. attribute name equal to the class name gets `Attribute`
    ///    appended;
    /// c. attribute name equal to an included Text/CDATA name gets
    ///    `Attribute` appended;
    /// d. walking text, CDATA, then attributes in enumeration order,
    ///    any name already assigned gets the first free numeric suffix.
    ///
    /// (Step b, synthetic-field construction, happens at inference
    /// time.) The class name itself seeds the used set, so no field can
    /// end up shadowing the type it lives in.
    fn resolve_property_names(&mut self) {
        let class_name = self.class_name.clone();

        let synthetic_names: Vec<String> = self
            .text
            .iter()
            .chain(self.cdata.iter())
            .map(|f| f.base_property_name().to_string())
            .collect();

        for field in &mut self.attributes {
            let mut name = field.base_property_name().to_string();
            if name == class_name {
                name.push_str("Attribute");
            }
            if synthetic_names.contains(&name) {
                name.push_str("Attribute");
            }
            field.set_resolved_property_name(name);
        }
        for field in self.text.iter_mut().chain(self.cdata.iter_mut()) {
            field.set_resolved_property_name(field.base_property_name().to_string());
        }

        let mut used = vec![class_name];
        for field in self
            .text
            .iter_mut()
            .chain(self.cdata.iter_mut())
            .chain(self.attributes.iter_mut())
        {
            let base = field.property_name().to_string();
            let mut candidate = base.clone();
            let mut suffix = 0;
            while used.contains(&candidate) {
                suffix += 1;
                candidate = format!("{base}{suffix}");
            }
            used.push(candidate.clone());
            field.set_resolved_property_name(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::{CDATA_FIELD_NAME, TEXT_FIELD_NAME};
    use pretty_assertions::assert_eq;

    fn node_with(name: &str, attrs: &[(&str, &str)]) -> XmlNode {
        let mut n = XmlNode::new(name);
        n.attributes = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        n
    }

    #[test]
    fn class_name_is_pascal_cased() {
        let a = node_with("item_list", &[]);
        let e = Element::infer("item_list", &[&a], true);
        assert_eq!(e.class_name(), "ItemList");
    }

    #[test]
    fn attributes_sorted_alphabetically() {
        let a = node_with("item", &[("zeta", "1"), ("alpha", "2")]);
        let b = node_with("item", &[("midway", "3")]);
        let e = Element::infer("item", &[&a, &b], true);
        let names: Vec<&str> = e.attributes().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["alpha", "midway", "zeta"]);
    }

    #[test]
    fn attribute_colliding_with_class_name_gets_suffix() {
        let a = node_with("item", &[("item", "x")]);
        let e = Element::infer("item", &[&a], true);
        assert_eq!(e.attributes()[0].property_name(), "ItemAttribute");
    }

    #[test]
    fn attribute_colliding_with_text_field_gets_suffix() {
        let mut a = node_with("msg", &[("text", "x")]);
        a.text = Some("body".to_string());
        let e = Element::infer("msg", &[&a], true);
        assert_eq!(e.text().unwrap().property_name(), "Text");
        assert_eq!(e.attributes()[0].property_name(), "TextAttribute");
    }

    #[test]
    fn attribute_colliding_with_excluded_text_field_keeps_name() {
        // No text content observed, so the synthetic field is excluded
        // and the attribute keeps its natural name.
        let a = node_with("msg", &[("text", "x")]);
        let e = Element::infer("msg", &[&a], true);
        assert!(e.text().is_none());
        assert_eq!(e.attributes()[0].property_name(), "Text");
    }

    #[test]
    fn duplicate_property_names_get_numeric_suffixes() {
        // "my-val" and "my_val" both pascal-case to "MyVal"; walked
        // alphabetically, the second gets a numeric suffix.
        let a = node_with("item", &[("my-val", "1"), ("my_val", "2")]);
        let e = Element::infer("item", &[&a], true);
        let names: Vec<&str> = e.attributes().iter().map(|f| f.property_name()).collect();
        assert_eq!(names, vec!["MyVal", "MyVal1"]);
    }

    #[test]
    fn text_and_cdata_included_only_with_nonempty_values() {
        let mut a = node_with("item", &[]);
        a.text = Some("hello".to_string());
        a.cdata = Some(String::new());
        let e = Element::infer("item", &[&a], true);
        assert!(e.text().is_some());
        assert!(e.cdata().is_none());
    }

    #[test]
    fn rename_reruns_collision_pass_deterministically() {
        let a = node_with("item", &[("a", "1"), ("b", "2")]);
        let mut e = Element::infer("item", &[&a], true);
        e.rename_field("b", "A");
        let names: Vec<&str> = e.attributes().iter().map(|f| f.property_name()).collect();
        assert_eq!(names, vec!["A", "A1"]);

        // Renaming back restores the original assignment.
        e.rename_field("b", "B");
        let names: Vec<&str> = e.attributes().iter().map(|f| f.property_name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn case_insensitive_mode_merges_attribute_spellings() {
        let a = node_with("item", &[("Id", "1")]);
        let b = node_with("item", &[("id", "2")]);
        let e = Element::infer("item", &[&a, &b], false);
        assert_eq!(e.attributes().len(), 1);
        let id = &e.attributes()[0];
        assert!(!id.is_optional());
        assert_eq!(id.possible_values().len(), 2);
    }

    #[test]
    fn synthetic_field_names_are_reserved() {
        let mut a = node_with("item", &[]);
        a.text = Some("x".to_string());
        a.cdata = Some("y".to_string());
        let e = Element::infer("item", &[&a], true);
        assert_eq!(e.text().unwrap().name(), TEXT_FIELD_NAME);
        assert_eq!(e.cdata().unwrap().name(), CDATA_FIELD_NAME);
    }

    #[test]
    #[should_panic(expected = "share one tag name")]
    fn mixed_tag_names_are_a_contract_violation() {
        let a = node_with("item", &[]);
        let b = node_with("other", &[]);
        Element::infer("item", &[&a, &b], true);
    }

    #[test]
    #[should_panic(expected = "corpus must not be empty")]
    fn empty_corpus_is_a_contract_violation() {
        Element::infer("item", &[], true);
    }
}

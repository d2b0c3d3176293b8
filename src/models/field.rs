//! Field model: one inferred piece of data on an element.

use tracing::debug;

use super::naming;
use crate::import::XmlNode;
use crate::types::{DataType, DataTypeKind};

/// Reserved synthetic field name for element text content.
pub const TEXT_FIELD_NAME: &str = "Text";
/// Reserved synthetic field name for element CDATA content.
pub const CDATA_FIELD_NAME: &str = "CDATA";

/// One inferable datum: an attribute, or the element's text or CDATA
/// content, observed across a corpus of same-named element nodes.
///
/// `is_optional` (absent on at least one node) and `can_be_empty`
/// (present-but-empty on at least one node) are independent facts
/// computed once at inference time. `possible_values` keeps the observed
/// non-empty literals, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    base_property_name: String,
    property_name: String,
    possible_values: Vec<String>,
    is_optional: bool,
    can_be_empty: bool,
    selected_type: DataTypeKind,
    types: Vec<DataType>,
    summary: String,
    remarks: String,
}

impl Field {
    /// Infers an attribute field over the corpus.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or `corpus` is empty (contract
    /// violations).
    pub fn infer_attribute(name: &str, corpus: &[&XmlNode], case_sensitive: bool) -> Self {
        let presence: Vec<Option<&str>> = corpus
            .iter()
            .map(|node| node.attribute(name, case_sensitive))
            .collect();
        Self::from_presence(name, &presence)
    }

    /// Infers the synthetic `Text` field over the corpus.
    ///
    /// # Panics
    ///
    /// Panics if `corpus` is empty.
    pub fn infer_text(corpus: &[&XmlNode]) -> Self {
        let presence: Vec<Option<&str>> = corpus.iter().map(|node| node.text.as_deref()).collect();
        Self::from_presence(TEXT_FIELD_NAME, &presence)
    }

    /// Infers the synthetic `CDATA` field over the corpus.
    ///
    /// # Panics
    ///
    /// Panics if `corpus` is empty.
    pub fn infer_cdata(corpus: &[&XmlNode]) -> Self {
        let presence: Vec<Option<&str>> = corpus.iter().map(|node| node.cdata.as_deref()).collect();
        Self::from_presence(CDATA_FIELD_NAME, &presence)
    }

    fn from_presence(name: &str, presence: &[Option<&str>]) -> Self {
        assert!(!name.is_empty(), "field name must not be empty");
        assert!(!presence.is_empty(), "field corpus must not be empty");

        let mut possible_values = Vec::new();
        let mut is_optional = false;
        let mut can_be_empty = false;
        for observed in presence {
            match observed {
                None => is_optional = true,
                Some("") => can_be_empty = true,
                Some(value) => possible_values.push(value.to_string()),
            }
        }

        let property_name = naming::pascal_case(name);
        let types = DataType::catalog(&property_name, &possible_values);
        let mut field = Self {
            name: name.to_string(),
            base_property_name: property_name.clone(),
            property_name,
            possible_values,
            is_optional,
            can_be_empty,
            selected_type: DataTypeKind::Text,
            types,
            summary: String::new(),
            remarks: String::new(),
        };
        field.selected_type = field.default_type();
        debug!(
            field = %field.name,
            selected = ?field.selected_type,
            values = field.possible_values.len(),
            optional = field.is_optional,
            empty = field.can_be_empty,
            "inferred field"
        );
        field
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved generated-identifier name (collision suffixes
    /// applied by the owning element).
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The requested property name before collision resolution.
    pub fn base_property_name(&self) -> &str {
        &self.base_property_name
    }

    pub(crate) fn set_base_property_name(&mut self, name: &str) {
        self.base_property_name = name.to_string();
    }

    pub(crate) fn set_resolved_property_name(&mut self, name: String) {
        self.property_name = name;
    }

    /// Observed non-empty values, duplicates retained. Deduplicate when
    /// only uniqueness matters.
    pub fn possible_values(&self) -> &[String] {
        &self.possible_values
    }

    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    pub fn can_be_empty(&self) -> bool {
        self.can_be_empty
    }

    /// User override for optionality (editing surface only; inference
    /// never calls this).
    pub fn set_optional(&mut self, optional: bool) {
        self.is_optional = optional;
    }

    /// User override for emptiness.
    pub fn set_can_be_empty(&mut self, can_be_empty: bool) {
        self.can_be_empty = can_be_empty;
    }

    pub fn selected_type(&self) -> DataTypeKind {
        self.selected_type
    }

    /// The evaluator instance behind the selected type.
    pub fn selected(&self) -> &DataType {
        &self.types[self.selected_type.rank()]
    }

    /// Selects a catalog member; any member may be chosen, including one
    /// the current samples do not support.
    pub fn set_selected_type(&mut self, kind: DataTypeKind) {
        self.selected_type = kind;
    }

    /// The most restrictive catalog member accepting every observed
    /// value; a field without observed values falls through to `Text`.
    pub fn default_type(&self) -> DataTypeKind {
        if self.possible_values.is_empty() {
            return DataTypeKind::Text;
        }
        self.types
            .iter()
            .find(|t| !t.has_invalid_values(&self.possible_values))
            .map(|t| t.kind())
            .unwrap_or(DataTypeKind::Text)
    }

    /// Re-runs default selection, e.g. after reconfiguring an
    /// evaluator's format knobs.
    pub fn reset_selected_type(&mut self) {
        self.selected_type = self.default_type();
    }

    /// Catalog members that accept every observed value.
    pub fn supported_types(&self) -> Vec<&DataType> {
        self.types
            .iter()
            .filter(|t| !t.has_invalid_values(&self.possible_values))
            .collect()
    }

    /// The whole catalog regardless of fit.
    pub fn all_types(&self) -> &[DataType] {
        &self.types
    }

    pub fn data_type(&self, kind: DataTypeKind) -> &DataType {
        &self.types[kind.rank()]
    }

    /// Mutable access for reconfiguring one evaluator's knobs. Changing
    /// a knob does not retroactively re-validate; call
    /// [`Field::reset_selected_type`] or re-query afterwards.
    pub fn data_type_mut(&mut self, kind: DataTypeKind) -> &mut DataType {
        &mut self.types[kind.rank()]
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary = summary.to_string();
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn set_remarks(&mut self, remarks: &str) {
        self.remarks = remarks.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(xml_attrs: &[(&str, &str)]) -> XmlNode {
        let mut n = XmlNode::new("item");
        n.attributes = xml_attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        n
    }

    #[test]
    fn collects_values_and_optionality() {
        let a = node(&[("id", "1"), ("note", "hi")]);
        let b = node(&[("id", "2")]);
        let corpus = vec![&a, &b];

        let id = Field::infer_attribute("id", &corpus, true);
        assert_eq!(id.possible_values(), &["1".to_string(), "2".to_string()]);
        assert!(!id.is_optional());
        assert!(!id.can_be_empty());

        let note = Field::infer_attribute("note", &corpus, true);
        assert!(note.is_optional());
        assert!(!note.can_be_empty());
        assert_eq!(note.selected_type(), DataTypeKind::Text);
    }

    #[test]
    fn empty_value_sets_can_be_empty_not_possible_values() {
        let a = node(&[("val", "")]);
        let corpus = vec![&a];
        let val = Field::infer_attribute("val", &corpus, true);
        assert!(!val.is_optional());
        assert!(val.can_be_empty());
        assert!(val.possible_values().is_empty());
        assert_eq!(val.selected_type(), DataTypeKind::Text);
    }

    #[test]
    fn duplicates_are_retained() {
        let a = node(&[("v", "x")]);
        let b = node(&[("v", "x")]);
        let corpus = vec![&a, &b];
        let v = Field::infer_attribute("v", &corpus, true);
        assert_eq!(v.possible_values().len(), 2);
    }

    #[test]
    fn default_type_is_most_restrictive_supported() {
        let a = node(&[("n", "10")]);
        let b = node(&[("n", "200")]);
        let corpus = vec![&a, &b];
        let n = Field::infer_attribute("n", &corpus, true);
        assert_eq!(n.selected_type(), DataTypeKind::Int32);
        assert!(
            n.supported_types()
                .iter()
                .any(|t| t.kind() == n.selected_type())
        );
    }

    #[test]
    fn boolean_ranks_before_integers() {
        let a = node(&[("flag", "0")]);
        let b = node(&[("flag", "1")]);
        let corpus = vec![&a, &b];
        let flag = Field::infer_attribute("flag", &corpus, true);
        assert_eq!(flag.selected_type(), DataTypeKind::Boolean);
    }

    #[test]
    fn mixed_number_formats_select_unsigned() {
        let a = node(&[("n", "10")]);
        let b = node(&[("n", "0x1F")]);
        let c = node(&[("n", "1011b")]);
        let corpus = vec![&a, &b, &c];
        let mut n = Field::infer_attribute("n", &corpus, true);
        assert_eq!(n.selected_type(), DataTypeKind::UInt32);

        // Disabling hex invalidates the previous selection and, with no
        // other numeric format covering the samples, drops to Text.
        if let DataType::UInt32(t) = n.data_type_mut(DataTypeKind::UInt32) {
            t.allow_hex = false;
        }
        assert!(
            n.data_type(DataTypeKind::UInt32)
                .has_invalid_values(n.possible_values())
        );
        for kind in [
            DataTypeKind::Int32,
            DataTypeKind::Int8,
            DataTypeKind::UInt8,
            DataTypeKind::Int16,
            DataTypeKind::UInt16,
            DataTypeKind::UInt64,
            DataTypeKind::Int64,
        ] {
            if let DataType::Int32(t)
            | DataType::UInt32(t)
            | DataType::Int8(t)
            | DataType::UInt8(t)
            | DataType::Int16(t)
            | DataType::UInt16(t)
            | DataType::UInt64(t)
            | DataType::Int64(t) = n.data_type_mut(kind)
            {
                t.allow_hex = false;
            }
        }
        n.reset_selected_type();
        assert_eq!(n.selected_type(), DataTypeKind::Text);
    }

    #[test]
    fn text_and_cdata_fields_use_reserved_names() {
        let mut a = XmlNode::new("item");
        a.text = Some("hello".to_string());
        a.cdata = Some("raw".to_string());
        let corpus = vec![&a];

        let text = Field::infer_text(&corpus);
        assert_eq!(text.name(), TEXT_FIELD_NAME);
        assert_eq!(text.property_name(), "Text");

        let cdata = Field::infer_cdata(&corpus);
        assert_eq!(cdata.name(), CDATA_FIELD_NAME);
        assert_eq!(cdata.property_name(), "CDATA");
    }

    #[test]
    fn case_insensitive_attribute_lookup() {
        let mut a = XmlNode::new("item");
        a.attributes.push(("Id".to_string(), "1".to_string()));
        let corpus = vec![&a];
        let field = Field::infer_attribute("id", &corpus, false);
        assert!(!field.is_optional());
        assert_eq!(field.possible_values(), &["1".to_string()]);
    }

    #[test]
    #[should_panic(expected = "corpus must not be empty")]
    fn empty_corpus_is_a_contract_violation() {
        Field::infer_attribute("id", &[], true);
    }
}

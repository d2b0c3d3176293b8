//! Free-form enumeration sample evaluator.

use crate::models::naming;

/// Maintains a mutable mapping from observed literals to generated
/// enumerator names and accepts exactly the mapped literals.
///
/// Enumerator names default to the Pascal-cased literal and are
/// de-duplicated with numeric suffixes so two literals never map to the
/// same enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// Generated enumeration type name.
    pub type_name: String,
    mapping: Vec<(String, String)>,
}

impl EnumType {
    /// Builds the mapping from the observed sample values, first-seen
    /// order, duplicates collapsed.
    pub fn from_samples(type_name: &str, samples: &[String]) -> Self {
        let mut e = Self {
            type_name: type_name.to_string(),
            mapping: Vec::new(),
        };
        for value in samples {
            e.insert(value);
        }
        e
    }

    /// Adds a literal with a default enumerator name; no-op if present.
    pub fn insert(&mut self, literal: &str) {
        if self.enumerator(literal).is_none() {
            let name = self.unique_enumerator(&naming::pascal_case(literal));
            self.mapping.push((literal.to_string(), name));
        }
    }

    /// Renames the enumerator for `literal`; returns false if the literal
    /// is unknown or the name is already taken by another literal.
    pub fn rename(&mut self, literal: &str, enumerator: &str) -> bool {
        if self
            .mapping
            .iter()
            .any(|(l, e)| l != literal && e == enumerator)
        {
            return false;
        }
        match self.mapping.iter_mut().find(|(l, _)| l == literal) {
            Some(entry) => {
                entry.1 = enumerator.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes a literal from the mapping; returns whether it was present.
    pub fn remove(&mut self, literal: &str) -> bool {
        let before = self.mapping.len();
        self.mapping.retain(|(l, _)| l != literal);
        self.mapping.len() != before
    }

    pub fn enumerator(&self, literal: &str) -> Option<&str> {
        self.mapping
            .iter()
            .find(|(l, _)| l == literal)
            .map(|(_, e)| e.as_str())
    }

    /// `(literal, enumerator)` pairs in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.mapping
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.mapping.iter().any(|(l, _)| l == value)
    }

    fn unique_enumerator(&self, base: &str) -> String {
        let taken = |name: &str| self.mapping.iter().any(|(_, e)| e == name);
        if !taken(base) {
            return base.to_string();
        }
        let mut i = 1;
        loop {
            let candidate = format!("{base}{i}");
            if !taken(&candidate) {
                return candidate;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn builds_deduplicated_mapping() {
        let e = EnumType::from_samples("Color", &samples(&["red", "green", "red"]));
        assert_eq!(e.entries().len(), 2);
        assert_eq!(e.enumerator("red"), Some("Red"));
        assert_eq!(e.enumerator("green"), Some("Green"));
    }

    #[test]
    fn accepts_only_mapped_literals() {
        let e = EnumType::from_samples("Color", &samples(&["red"]));
        assert!(e.accepts("red"));
        assert!(!e.accepts("Red"));
        assert!(!e.accepts("blue"));
    }

    #[test]
    fn colliding_enumerators_get_suffixes() {
        let e = EnumType::from_samples("Kind", &samples(&["foo-bar", "foo_bar"]));
        assert_eq!(e.enumerator("foo-bar"), Some("FooBar"));
        assert_eq!(e.enumerator("foo_bar"), Some("FooBar1"));
    }

    #[test]
    fn mapping_is_mutable() {
        let mut e = EnumType::from_samples("Kind", &samples(&["a", "b"]));
        assert!(e.rename("a", "Alpha"));
        assert_eq!(e.enumerator("a"), Some("Alpha"));
        assert!(!e.rename("b", "Alpha"));
        assert!(e.remove("b"));
        assert!(!e.accepts("b"));
        e.insert("c");
        assert!(e.accepts("c"));
    }
}

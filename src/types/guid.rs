//! GUID sample evaluator.

use uuid::Uuid;

/// Accepts hyphenated 32-hex-digit GUID literals, optionally wrapped in
/// braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidType {
    /// Accept `{...}` around the hyphenated form.
    pub allow_braces: bool,
}

impl Default for GuidType {
    fn default() -> Self {
        Self { allow_braces: true }
    }
}

impl GuidType {
    pub fn accepts(&self, value: &str) -> bool {
        let mut v = value.trim();
        if let Some(inner) = v.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
            if !self.allow_braces {
                return false;
            }
            v = inner;
        }
        // Uuid::parse_str also takes the compact and urn forms; only the
        // hyphenated layout counts here.
        let b = v.as_bytes();
        b.len() == 36
            && b[8] == b'-'
            && b[13] == b'-'
            && b[18] == b'-'
            && b[23] == b'-'
            && Uuid::parse_str(v).is_ok()
    }
}

//! Version-number sample evaluator.

/// Accepts `major.minor[.build[.revision]]` literals.
///
/// Major and minor are always required; the build and revision components
/// are independently enableable (revision additionally requires a build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionType {
    pub allow_build: bool,
    pub allow_revision: bool,
}

impl Default for VersionType {
    fn default() -> Self {
        Self {
            allow_build: true,
            allow_revision: true,
        }
    }
}

impl VersionType {
    pub fn accepts(&self, value: &str) -> bool {
        let parts: Vec<&str> = value.trim().split('.').collect();
        let allowed = match parts.len() {
            2 => true,
            3 => self.allow_build,
            4 => self.allow_build && self.allow_revision,
            _ => false,
        };
        allowed
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) && p.parse::<u32>().is_ok())
    }
}

//! Override-state loading and reapplication.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::{OverrideError, OverrideState};
use crate::models::Document;

/// Loads persisted override state and reapplies it to a freshly
/// inferred document.
pub struct OverrideLoader;

impl OverrideLoader {
    /// Parses an override document from XML text.
    pub fn load_from_str(content: &str) -> Result<OverrideState, OverrideError> {
        quick_xml::de::from_str(content).map_err(|e| OverrideError::Parse(e.to_string()))
    }

    /// Reads and parses an override document from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<OverrideState, OverrideError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OverrideError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Reapplies recorded edits onto a document.
    ///
    /// Entries naming elements or fields that no longer exist are
    /// skipped with a warning, since the sample document may have
    /// changed since the overrides were saved.
    pub fn apply(state: &OverrideState, document: &mut Document) {
        let mut applied = 0usize;
        for element_overrides in &state.elements {
            let Some(element) = document.element_mut(&element_overrides.name) else {
                warn!(
                    element = %element_overrides.name,
                    "skipping overrides for unknown element"
                );
                continue;
            };
            for field_override in &element_overrides.fields {
                if element.field(&field_override.name).is_none() {
                    warn!(
                        element = %element_overrides.name,
                        field = %field_override.name,
                        "skipping override for unknown field"
                    );
                    continue;
                }
                element.rename_field(&field_override.name, &field_override.property_name);
                let Some(field) = element.field_mut(&field_override.name) else {
                    continue;
                };
                field.set_selected_type(field_override.selected_type);
                field.set_optional(field_override.is_optional);
                field.set_can_be_empty(field_override.can_be_empty);
                field.set_summary(field_override.summary.as_deref().unwrap_or(""));
                field.set_remarks(field_override.remarks.as_deref().unwrap_or(""));
                applied += 1;
            }
        }
        info!(applied, "reapplied schema overrides");
    }
}

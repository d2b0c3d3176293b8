//! Override-state capture and saving.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{ElementOverrides, FieldOverride, OverrideError, OverrideState};
use crate::models::Document;

/// Captures a document's editable state and writes it out as XML.
pub struct OverrideSaver;

impl OverrideSaver {
    /// Snapshots every field's editable state, element keys in table
    /// order.
    pub fn capture(document: &Document) -> OverrideState {
        let elements = document
            .elements()
            .map(|element| ElementOverrides {
                name: element.key().to_string(),
                fields: element
                    .fields()
                    .map(|field| FieldOverride {
                        name: field.name().to_string(),
                        property_name: field.property_name().to_string(),
                        selected_type: field.selected_type(),
                        is_optional: field.is_optional(),
                        can_be_empty: field.can_be_empty(),
                        summary: Some(field.summary().to_string())
                            .filter(|s| !s.is_empty()),
                        remarks: Some(field.remarks().to_string())
                            .filter(|s| !s.is_empty()),
                    })
                    .collect(),
            })
            .collect();
        OverrideState { elements }
    }

    /// Serializes the captured state to an XML string.
    pub fn save_to_string(document: &Document) -> Result<String, OverrideError> {
        let state = Self::capture(document);
        quick_xml::se::to_string(&state)
            .map_err(|e| OverrideError::Serialization(e.to_string()))
    }

    /// Serializes the captured state and writes it to `path`.
    pub fn save_to_path(document: &Document, path: impl AsRef<Path>) -> Result<(), OverrideError> {
        let path = path.as_ref();
        let content = Self::save_to_string(document)?;
        fs::write(path, content).map_err(|source| OverrideError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "saved schema overrides");
        Ok(())
    }
}

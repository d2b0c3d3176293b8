//! Schema-edit override persistence
//!
//! A user editing session mutates the inferred schema (selected types,
//! property renames, optionality flags, free-text summaries). This
//! module records those edits in a small XML document keyed by
//! element/field name so they can be reapplied after a fresh inference
//! pass over the same sample. Saving then loading without the sample
//! changing reproduces the exact prior override values.

pub mod loader;
pub mod saver;

use serde::{Deserialize, Serialize};

use crate::types::DataTypeKind;

/// Error while saving or loading override state.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted override document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "SchemaOverrides")]
pub struct OverrideState {
    #[serde(rename = "Element", default)]
    pub elements: Vec<ElementOverrides>,
}

/// Overrides for one element, keyed by its document-table key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementOverrides {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "Field", default)]
    pub fields: Vec<FieldOverride>,
}

/// Snapshot of one field's editable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOverride {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@propertyName")]
    pub property_name: String,
    #[serde(rename = "@selectedType")]
    pub selected_type: DataTypeKind,
    #[serde(rename = "@isOptional")]
    pub is_optional: bool,
    #[serde(rename = "@canBeEmpty")]
    pub can_be_empty: bool,
    #[serde(rename = "Summary", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "Remarks", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

// Re-export for convenience
pub use loader::OverrideLoader;
pub use saver::OverrideSaver;

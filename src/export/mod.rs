//! Export functionality
//!
//! Projects inferred elements into abstract class descriptions for an
//! external code renderer: class shape, property types, constructor and
//! import/export method contracts. No source text is produced here;
//! the renderer owns formatting, file layout and language syntax.

pub mod classes;

/// Error during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown element '{0}'")]
    UnknownElement(String),
}

/// Renderer-neutral description of one generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescription {
    pub name: String,
    pub summary: String,
    pub properties: Vec<PropertyDescription>,
    pub constructors: Vec<ConstructorDescription>,
    pub methods: Vec<MethodDescription>,
    /// Child classes, populated in hierarchical mode only.
    pub nested: Vec<ClassDescription>,
}

/// One generated property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescription {
    pub name: String,
    /// Generated type, already widened to `Option<...>` where required.
    pub type_name: String,
    /// Whether the type was widened for optionality/emptiness.
    pub optional: bool,
    pub summary: String,
}

/// One constructor parameter or method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescription {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// One parameter per field and child array, assigned directly.
    PerValue,
    /// Single node-reference parameter; re-derives every field through
    /// its import contract, defaulting absent-but-optional fields and
    /// failing with a data error on a missing non-optional field.
    FromNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDescription {
    pub kind: ConstructorKind,
    pub parameters: Vec<ParameterDescription>,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Parse one field's raw string into its typed value.
    ImportField,
    /// Render one field's typed value back to its canonical string.
    ExportField,
    /// Read a sample file and build the root class.
    ImportDocument,
    /// Write the root class back out as a file.
    ExportDocument,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescription {
    pub kind: MethodKind,
    pub name: String,
    pub parameters: Vec<ParameterDescription>,
    pub return_type: String,
    pub summary: String,
}

// Re-export for convenience
pub use classes::ClassExporter;

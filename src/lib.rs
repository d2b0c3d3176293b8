//! XML Modelling SDK - Infers typed class models from sample XML documents
//!
//! Provides unified interfaces for:
//! - Importing a sample XML document into an inferred schema
//!   (per-field value collection, optionality, emptiness, data types)
//! - The type lattice ranking candidate data types most-restrictive first
//! - Projecting inferred elements into renderer-neutral class
//!   descriptions (properties, constructors, import/export contracts)
//! - Persisting and reapplying user schema edits across inference runs
//!
//! ```rust
//! use xml_modelling_sdk::import::XmlImporter;
//! use xml_modelling_sdk::export::ClassExporter;
//!
//! let xml = r#"<Root><Item id="1" note="hi"/><Item id="2"/></Root>"#;
//! let document = XmlImporter::default().import_str(xml).unwrap();
//! let classes = ClassExporter::export_document(&document);
//! assert!(classes.iter().any(|c| c.name == "Item"));
//! ```

pub mod export;
pub mod import;
pub mod models;
pub mod overrides;
pub mod types;

// Re-export commonly used types
pub use export::{ClassDescription, ClassExporter, ExportError};
pub use import::{ImportError, XmlImporter, XmlNode, parse_document};
pub use models::{Document, Element, Field, XmlHeader};
pub use overrides::{OverrideError, OverrideLoader, OverrideSaver, OverrideState};
pub use types::{DataType, DataTypeKind};

//! Import functionality
//!
//! Builds an inferred [`crate::models::Document`] from a sample XML
//! document: an in-memory node tree parsed with quick-xml, a grouping
//! walk over that tree (flat or hierarchical keying), and one element
//! inference pass per group.

pub mod node;
pub mod xml;

/// Error during import.
///
/// Every variant is an input-data error in the sense of the crate's
/// error taxonomy: the calling surface shows it to the user and aborts
/// the operation. Contract violations (empty corpora, mixed tag names)
/// panic instead.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("XML parse error at position {position}: {source}")]
    Parse {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    #[error("malformed XML: {0}")]
    Malformed(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("document has no root element")]
    MissingRoot,
}

// Re-export for convenience
pub use node::{XmlNode, parse_document};
pub use xml::XmlImporter;

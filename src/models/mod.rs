//! Models module for the SDK
//!
//! Defines the inferred-schema data structures: fields, elements and the
//! document-level element arena, plus the identifier transforms they
//! share.

pub mod document;
pub mod element;
pub mod field;
pub mod naming;

pub use document::{Document, XmlHeader};
pub use element::Element;
pub use field::{CDATA_FIELD_NAME, Field, TEXT_FIELD_NAME};

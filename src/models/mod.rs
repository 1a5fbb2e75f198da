pub mod document;

pub use document::{Document, DocumentField, FieldValue, DEFAULT_LANGUAGE};

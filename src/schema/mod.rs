//! Schema and field registration
//!
//! This module defines the schema system, including:
//! - Field types and options (TEXT, NUMERIC, GEO, TAG; NOINDEX, SORTABLE, ...)
//! - Field ids and the field masks used to scope query predicates
//! - The schema registry resolving field names

mod field_mask;
mod field_type;
mod mapping;

pub use field_mask::{FieldId, FieldMask};
pub use field_type::{FieldOptions, FieldTypes};
pub use mapping::{FieldSpec, Schema};

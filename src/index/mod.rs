//! In-memory reference index
//!
//! This module provides the storage side of quern:
//! - Internal document ids and the document table
//! - Positional term index, numeric and tag indexes
//! - The `Index` tying them together and serving compiled queries
//! - A registry of named indexes

mod doc_table;
#[allow(clippy::module_inception)]
mod index;
mod numeric;
mod registry;
mod tags;
mod terms;
mod types;

pub use doc_table::{DocEntry, DocTable};
pub use index::{Index, FIELD_POSITION_GAP};
pub use numeric::NumericIndex;
pub use registry::{IndexRef, IndexRegistry};
pub use tags::{normalize_tag, split_tags, TagIndex};
pub use terms::TermIndex;
pub use types::{DocId, FieldPositions, Posting};

//! quern - query trees, field masks and lazy result iterators for an
//! embedded search index
//!
//! Applications build a tree of typed predicates, compile it against an
//! [`Index`], and read matching documents in ascending id order.

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod query;
pub mod schema;
pub mod tokenizer;

pub use config::{IndexSettings, TokenizerConfig};
pub use error::{QuernError, Result};
pub use index::{DocId, Index, IndexRegistry};
pub use models::*;
pub use query::{QueryNode, QueryNodeType, ResultsIterator};
pub use schema::{FieldId, FieldMask, FieldOptions, FieldTypes, Schema};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the embedding API
pub const CAPI_VERSION: u32 = 1;

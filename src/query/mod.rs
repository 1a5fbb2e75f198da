//! Query trees and their execution
//!
//! This module provides the query side of quern:
//! - Query nodes (token, prefix, numeric, lexical range, tag, phrase, union)
//! - Field masks scoping leaf predicates to schema fields
//! - Expansion passes that rewrite a tree before compilation
//! - The compiler turning a tree into one merged iterator
//! - The results handle callers read matches from
//!
//! # Example
//!
//! ```rust
//! use quern::config::IndexSettings;
//! use quern::index::Index;
//! use quern::models::Document;
//! use quern::query::QueryNode;
//! use quern::schema::{FieldOptions, FieldTypes};
//!
//! let mut index = Index::new("docs", IndexSettings::default());
//! index.create_field("title", FieldTypes::TEXT, FieldOptions::empty()).unwrap();
//! index.add_document(Document::new("doc:1", 1.0, None).with_text("title", "the quick fox")).unwrap();
//!
//! let mut phrase = QueryNode::phrase(true);
//! for word in ["quick", "fox"] {
//!     phrase.add_child(QueryNode::token(index.schema(), Some("title"), word).unwrap()).unwrap();
//! }
//!
//! let mut results = index.compile(phrase);
//! assert_eq!(results.next_key(), Some("doc:1"));
//! assert_eq!(results.next_key(), None);
//! ```

pub mod accessor;
pub mod ast;
pub mod compiler;
pub mod expand;
pub mod iterators;
pub mod nodes;
pub mod results;

pub use accessor::{DocumentTable, PostingsProvider};
pub use ast::{NodeKind, QueryNode, QueryNodeType};
pub use compiler::QueryCompiler;
pub use expand::{QueryExpander, StemmingExpander};
pub use iterators::{IndexIterator, IndexResult};
pub use results::ResultsIterator;

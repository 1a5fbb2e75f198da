//! Query expansion
//!
//! Expanders rewrite a query tree in place before compilation. The stemming
//! expander attaches each token's stem marker term, so a query for "running"
//! also matches documents that only contain "runs".

use rust_stemmers::Stemmer;
use tracing::trace;

use crate::schema::Schema;
use crate::tokenizer::{stem_term, stemming_algorithm};

use super::ast::{NodeKind, QueryNode};

/// In-place rewriting pass over a query tree
pub trait QueryExpander {
    fn expand(&self, node: &mut QueryNode, schema: &Schema);
}

/// Appends stem marker terms to token nodes
pub struct StemmingExpander {
    stemmer: Stemmer,
}

impl StemmingExpander {
    pub fn new(language: &str) -> Self {
        Self {
            stemmer: Stemmer::create(stemming_algorithm(language)),
        }
    }
}

impl QueryExpander for StemmingExpander {
    fn expand(&self, node: &mut QueryNode, schema: &Schema) {
        // stems are only indexed for stemmed text fields
        let stemmed = schema.stemmed_mask();
        let mask = node.field_mask;

        if let NodeKind::Tag(_) = node.kind {
            // tag values match verbatim
            return;
        }

        if let NodeKind::Token(token) = &mut node.kind {
            if token.expanded || !mask.intersects(stemmed) {
                return;
            }
            let stem = self.stemmer.stem(&token.text).into_owned();
            if !stem.is_empty() {
                trace!(term = %token.text, %stem, "stem expansion");
                token.add_expansion(stem_term(&stem));
                token.add_expansion(stem);
            }
            token.expanded = true;
            return;
        }

        for child in node.children_mut() {
            self.expand(child, schema);
        }
    }
}

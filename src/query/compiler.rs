//! Query compilation
//!
//! Walks a query tree bottom-up and produces a single iterator:
//! - leaves resolve to posting-list or bitmap iterators through a
//!   [`PostingsProvider`], filtered by the node's field mask
//! - unions become k-way merges, phrases become intersections
//! - anything that cannot match becomes an [`EmptyIterator`]

use tracing::{debug, trace, warn};

use crate::config::IndexSettings;
use crate::schema::{FieldId, FieldMask};

use super::accessor::PostingsProvider;
use super::ast::{NodeKind, QueryNode};
use super::iterators::{EmptyIterator, IndexIterator, IntersectIterator, UnionIterator};
use super::nodes::{LexRangeNode, NumericFilter, PhraseNode, PrefixNode, TagNode, TokenNode};

type BoxedIterator<'a> = Box<dyn IndexIterator + 'a>;

/// Compiles query trees against one provider
pub struct QueryCompiler<'a> {
    provider: &'a dyn PostingsProvider,
    /// Prefixes shorter than this never match
    min_prefix: usize,
    max_prefix_expansions: Option<usize>,
}

impl<'a> QueryCompiler<'a> {
    pub fn new(provider: &'a dyn PostingsProvider) -> Self {
        Self {
            provider,
            min_prefix: 0,
            max_prefix_expansions: None,
        }
    }

    pub fn from_settings(provider: &'a dyn PostingsProvider, settings: &IndexSettings) -> Self {
        Self {
            provider,
            min_prefix: settings.min_prefix,
            max_prefix_expansions: settings.max_prefix_expansions,
        }
    }

    pub fn with_min_prefix(mut self, min_prefix: usize) -> Self {
        self.min_prefix = min_prefix;
        self
    }

    pub fn with_max_prefix_expansions(mut self, max: Option<usize>) -> Self {
        self.max_prefix_expansions = max;
        self
    }

    /// Compile `root`, consuming the tree
    pub fn compile(&self, root: QueryNode) -> BoxedIterator<'a> {
        let nodes = root.node_count();
        let iter = self.compile_node(root);
        debug!(nodes, root = iter.kind(), estimate = iter.estimate(), "compiled query");
        iter
    }

    fn compile_node(&self, node: QueryNode) -> BoxedIterator<'a> {
        let mask = node.field_mask;
        match node.kind {
            NodeKind::Token(token) => self.compile_token(&token, mask),
            NodeKind::Prefix(prefix) => self.compile_prefix(&prefix, mask),
            NodeKind::LexRange(range) => self.compile_lex_range(&range, mask),
            NodeKind::Numeric(filter) => self.compile_numeric(&filter),
            NodeKind::Tag(tag) => self.compile_tag(tag),
            NodeKind::Phrase(phrase) => self.compile_phrase(phrase),
            NodeKind::Union(union) => {
                let children = union
                    .children
                    .into_iter()
                    .map(|child| self.compile_node(child))
                    .collect();
                union_of(children)
            }
        }
    }

    fn compile_token(&self, token: &TokenNode, mask: FieldMask) -> BoxedIterator<'a> {
        let provider = self.provider;
        let children = token
            .terms()
            .filter_map(|term| provider.term_iterator(term, mask))
            .collect();
        union_of(children)
    }

    fn compile_prefix(&self, prefix: &PrefixNode, mask: FieldMask) -> BoxedIterator<'a> {
        if prefix.text.chars().count() < self.min_prefix {
            warn!(
                prefix = %prefix.text,
                min_prefix = self.min_prefix,
                "prefix too short, matching nothing"
            );
            return Box::new(EmptyIterator);
        }

        let provider = self.provider;
        let terms = provider.prefix_terms(&prefix.text, self.max_prefix_expansions);
        trace!(prefix = %prefix.text, expansions = terms.len(), "expanded prefix");
        self.terms_union(terms, mask)
    }

    fn compile_lex_range(&self, range: &LexRangeNode, mask: FieldMask) -> BoxedIterator<'a> {
        let provider = self.provider;
        let terms = provider.range_terms(range.begin.as_deref(), range.end.as_deref());
        trace!(begin = ?range.begin, end = ?range.end, expansions = terms.len(), "expanded range");
        self.terms_union(terms, mask)
    }

    fn compile_numeric(&self, filter: &NumericFilter) -> BoxedIterator<'a> {
        let provider = self.provider;
        provider
            .numeric_iterator(filter)
            .unwrap_or_else(|| Box::new(EmptyIterator))
    }

    fn compile_tag(&self, tag: TagNode) -> BoxedIterator<'a> {
        let field = tag.field_id;
        let children = tag
            .children
            .into_iter()
            .map(|child| self.compile_tag_child(field, child))
            .collect();
        union_of(children)
    }

    /// Resolve one tag child against the values of `field`
    fn compile_tag_child(&self, field: FieldId, node: QueryNode) -> BoxedIterator<'a> {
        let provider = self.provider;
        let values: Vec<String> = match node.kind {
            NodeKind::Token(token) => vec![token.text],
            NodeKind::Prefix(prefix) => provider
                .tag_prefix_values(field, &prefix.text, self.max_prefix_expansions)
                .into_iter()
                .map(str::to_string)
                .collect(),
            NodeKind::LexRange(range) => provider
                .tag_range_values(field, range.begin.as_deref(), range.end.as_deref())
                .into_iter()
                .map(str::to_string)
                .collect(),
            NodeKind::Phrase(phrase) => phrase_tag_value(&phrase).into_iter().collect(),
            NodeKind::Union(union) => {
                let children = union
                    .children
                    .into_iter()
                    .map(|child| self.compile_tag_child(field, child))
                    .collect();
                return union_of(children);
            }
            NodeKind::Tag(nested) => return self.compile_tag(nested),
            NodeKind::Numeric(_) => {
                debug!(%field, "numeric node under a tag matches nothing");
                Vec::new()
            }
        };

        let children = values
            .iter()
            .filter_map(|value| provider.tag_iterator(field, value))
            .collect();
        union_of(children)
    }

    fn compile_phrase(&self, phrase: PhraseNode) -> BoxedIterator<'a> {
        let exact = phrase.exact;
        let mut children: Vec<BoxedIterator<'a>> = phrase
            .children
            .into_iter()
            .map(|child| self.compile_node(child))
            .collect();

        match children.len() {
            0 => Box::new(EmptyIterator),
            1 => children.remove(0),
            _ => Box::new(IntersectIterator::new(children, exact)),
        }
    }

    fn terms_union(&self, terms: Vec<&str>, mask: FieldMask) -> BoxedIterator<'a> {
        let provider = self.provider;
        let children = terms
            .into_iter()
            .filter_map(|term| provider.term_iterator(term, mask))
            .collect();
        union_of(children)
    }
}

/// Union of `children`, collapsing the zero and one child cases
fn union_of(mut children: Vec<BoxedIterator<'_>>) -> BoxedIterator<'_> {
    match children.len() {
        0 => Box::new(EmptyIterator),
        1 => children.remove(0),
        _ => Box::new(UnionIterator::new(children)),
    }
}

/// A phrase under a tag names one multi-word tag value
fn phrase_tag_value(phrase: &PhraseNode) -> Option<String> {
    let words: Vec<&str> = phrase
        .children
        .iter()
        .filter_map(|child| match child.kind() {
            NodeKind::Token(token) => Some(token.text.as_str()),
            _ => None,
        })
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

//! Term dictionary with positional posting lists
//!
//! Terms are kept in a sorted map so prefix and range expansion are ordered
//! scans. Stem marker terms share the dictionary but are never returned by
//! expansion.

use std::collections::BTreeMap;
use std::ops::Bound;

use super::types::{DocId, Posting};
use crate::schema::FieldId;
use crate::tokenizer::is_stem_term;

/// In-memory inverted index
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    terms: BTreeMap<String, Vec<Posting>>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `term` at `position` of `field` in `doc_id`
    ///
    /// Documents must be added in ascending id order.
    pub fn add(&mut self, term: &str, doc_id: DocId, field: FieldId, position: u32) {
        let postings = self.terms.entry(term.to_string()).or_default();

        match postings.last_mut() {
            Some(last) if last.doc_id == doc_id => last.add_occurrence(field, position),
            _ => {
                debug_assert!(postings.last().map_or(true, |p| p.doc_id < doc_id));
                let mut posting = Posting::new(doc_id);
                posting.add_occurrence(field, position);
                postings.push(posting);
            }
        }
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Surface terms starting with `prefix`, ascending, at most `limit`
    pub fn prefix_terms(&self, prefix: &str, limit: Option<usize>) -> Vec<&str> {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(term, _)| term.as_str())
            .take_while(|term| term.starts_with(prefix))
            .filter(|term| !is_stem_term(term))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Surface terms inside the inclusive range
    pub fn range_terms(&self, begin: Option<&str>, end: Option<&str>) -> Vec<&str> {
        if let (Some(begin), Some(end)) = (begin, end) {
            if begin > end {
                return Vec::new();
            }
        }

        let lower = begin.map_or(Bound::Unbounded, Bound::Included);
        let upper = end.map_or(Bound::Unbounded, Bound::Included);
        self.terms
            .range::<str, _>((lower, upper))
            .map(|(term, _)| term.as_str())
            .filter(|term| !is_stem_term(term))
            .collect()
    }

    /// Number of distinct terms, stem markers included
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

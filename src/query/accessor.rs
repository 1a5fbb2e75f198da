//! Index access for query compilation
//!
//! The compiler resolves leaf predicates through these traits, so any index
//! that can hand out posting-list and bitmap iterators can run compiled
//! queries.

use crate::index::DocId;
use crate::schema::{FieldId, FieldMask};

use super::iterators::IndexIterator;
use super::nodes::NumericFilter;

/// Source of leaf iterators and dictionary expansion
///
/// Iterator-returning methods yield `None` when nothing can match.
pub trait PostingsProvider {
    /// Postings of `term`, restricted to the fields in `mask`
    fn term_iterator(&self, term: &str, mask: FieldMask) -> Option<Box<dyn IndexIterator + '_>>;

    /// Dictionary terms starting with `prefix`, ascending, at most `limit`
    fn prefix_terms(&self, prefix: &str, limit: Option<usize>) -> Vec<&str>;

    /// Dictionary terms inside the inclusive range; `None` bounds are open
    fn range_terms(&self, begin: Option<&str>, end: Option<&str>) -> Vec<&str>;

    /// Documents whose numeric value falls inside `filter`
    fn numeric_iterator(&self, filter: &NumericFilter) -> Option<Box<dyn IndexIterator + '_>>;

    /// Documents carrying the tag `value` in `field`
    fn tag_iterator(&self, field: FieldId, value: &str) -> Option<Box<dyn IndexIterator + '_>>;

    /// Tag values of `field` starting with `prefix`, ascending, at most `limit`
    fn tag_prefix_values(&self, field: FieldId, prefix: &str, limit: Option<usize>) -> Vec<&str>;

    /// Tag values of `field` inside the inclusive range
    fn tag_range_values(
        &self,
        field: FieldId,
        begin: Option<&str>,
        end: Option<&str>,
    ) -> Vec<&str>;
}

/// Mapping between external document keys and internal ids
pub trait DocumentTable {
    /// Internal id of a live document
    fn id_for(&self, key: &str) -> Option<DocId>;

    /// External key of a live document; `None` for unknown or deleted ids
    fn key_for(&self, id: DocId) -> Option<&str>;
}

//! Result iterators
//!
//! Every compiled query node becomes an [`IndexIterator`]: a cursor yielding
//! strictly ascending document ids together with per-document match data.
//! Leaves read posting lists or doc-id bitmaps; combinators merge their
//! children with a k-way union or a seek-driven intersection.

mod bitmap;
mod empty;
mod intersect;
mod postings;
mod union;

pub use bitmap::BitmapIterator;
pub use empty::EmptyIterator;
pub use intersect::IntersectIterator;
pub use postings::PostingsIterator;
pub use union::UnionIterator;

use crate::index::DocId;
use crate::schema::FieldMask;

/// Match data for the document an iterator is positioned on
#[derive(Clone, Debug, PartialEq)]
pub struct IndexResult {
    pub doc_id: DocId,
    /// Fields the match occurred in
    pub field_mask: FieldMask,
    /// Distinct matched positions, or the number of matched terms when
    /// no positions are known
    pub freq: u32,
    /// Sorted term positions; empty for numeric and tag matches
    pub positions: Vec<u32>,
}

impl IndexResult {
    pub fn new(doc_id: DocId) -> Self {
        Self {
            doc_id,
            field_mask: FieldMask::NONE,
            freq: 0,
            positions: Vec::new(),
        }
    }

    /// Fold another match on the same document into this one
    pub fn merge(&mut self, other: &IndexResult) {
        debug_assert_eq!(self.doc_id, other.doc_id);
        self.field_mask |= other.field_mask;
        self.freq += other.freq;
        if !other.positions.is_empty() {
            self.positions.extend_from_slice(&other.positions);
            self.positions.sort_unstable();
            self.positions.dedup();
        }
        if !self.positions.is_empty() {
            self.freq = self.positions.len() as u32;
        }
    }
}

/// Cursor over matching documents in ascending id order
///
/// A fresh iterator is positioned before its first document. Once `read`
/// or `skip_to` returns `None` the iterator stays exhausted until `rewind`.
pub trait IndexIterator {
    /// Advance to the next matching document
    fn read(&mut self) -> Option<DocId>;

    /// Advance to the first matching document with id `>= target`
    ///
    /// An iterator already positioned on or past `target` does not move.
    fn skip_to(&mut self, target: DocId) -> Option<DocId>;

    /// Match data of the current document; `None` before the first read and after exhaustion
    fn current(&self) -> Option<&IndexResult>;

    /// Reset to the position before the first document
    fn rewind(&mut self);

    /// Upper bound on the number of documents this iterator yields
    fn estimate(&self) -> usize;

    /// Short name used in logs
    fn kind(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for iterator tests

    use std::borrow::Cow;

    use roaring::RoaringTreemap;

    use super::*;

    pub fn ids(ids: &[u64]) -> Box<dyn IndexIterator + 'static> {
        let bitmap: RoaringTreemap = ids.iter().copied().collect();
        Box::new(BitmapIterator::new(Cow::Owned(bitmap), FieldMask::ALL))
    }

    pub fn drain(iter: &mut dyn IndexIterator) -> Vec<u64> {
        let mut out = Vec::new();
        while let Some(doc) = iter.read() {
            out.push(doc.as_u64());
        }
        out
    }
}

//! Iterator over a doc-id bitmap, used for numeric and tag matches

use std::borrow::Cow;

use roaring::RoaringTreemap;

use crate::index::DocId;
use crate::schema::FieldMask;

use super::{IndexIterator, IndexResult};

/// Walks a roaring treemap by rank
pub struct BitmapIterator<'a> {
    bitmap: Cow<'a, RoaringTreemap>,
    field_mask: FieldMask,
    /// Rank of the next id to yield
    next_rank: u64,
    current: Option<IndexResult>,
}

impl<'a> BitmapIterator<'a> {
    /// Results report `field_mask` as their matched fields
    pub fn new(bitmap: Cow<'a, RoaringTreemap>, field_mask: FieldMask) -> Self {
        Self {
            bitmap,
            field_mask,
            next_rank: 0,
            current: None,
        }
    }

    fn advance(&mut self) -> Option<DocId> {
        match self.bitmap.select(self.next_rank) {
            Some(id) => {
                self.next_rank += 1;
                let mut result = IndexResult::new(DocId(id));
                result.field_mask = self.field_mask;
                result.freq = 1;
                self.current = Some(result);
                Some(DocId(id))
            }
            None => {
                self.next_rank = self.bitmap.len();
                self.current = None;
                None
            }
        }
    }
}

impl IndexIterator for BitmapIterator<'_> {
    fn read(&mut self) -> Option<DocId> {
        self.advance()
    }

    fn skip_to(&mut self, target: DocId) -> Option<DocId> {
        if let Some(current) = &self.current {
            if current.doc_id >= target {
                return Some(current.doc_id);
            }
        }

        // number of ids strictly below the target
        let below = match target.as_u64() {
            0 => 0,
            t => self.bitmap.rank(t - 1),
        };
        self.next_rank = self.next_rank.max(below);
        self.advance()
    }

    fn current(&self) -> Option<&IndexResult> {
        self.current.as_ref()
    }

    fn rewind(&mut self) {
        self.next_rank = 0;
        self.current = None;
    }

    fn estimate(&self) -> usize {
        self.bitmap.len() as usize
    }

    fn kind(&self) -> &'static str {
        "bitmap"
    }
}

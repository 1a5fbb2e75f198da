//! Iterator over one term's posting list

use crate::index::{DocId, Posting};
use crate::schema::FieldMask;

use super::{IndexIterator, IndexResult};

/// Walks a posting list, keeping only postings in the masked fields
pub struct PostingsIterator<'a> {
    postings: &'a [Posting],
    mask: FieldMask,
    /// Index of the next posting to inspect
    next: usize,
    current: Option<IndexResult>,
}

impl<'a> PostingsIterator<'a> {
    /// `postings` must be sorted by doc id
    pub fn new(postings: &'a [Posting], mask: FieldMask) -> Self {
        Self {
            postings,
            mask,
            next: 0,
            current: None,
        }
    }

    fn advance(&mut self) -> Option<DocId> {
        while let Some(posting) = self.postings.get(self.next) {
            self.next += 1;
            let field_mask = posting.field_mask & self.mask;
            if field_mask.is_empty() {
                continue;
            }

            let positions = posting.positions(self.mask);
            self.current = Some(IndexResult {
                doc_id: posting.doc_id,
                field_mask,
                freq: positions.len() as u32,
                positions,
            });
            return Some(posting.doc_id);
        }

        self.current = None;
        None
    }
}

impl IndexIterator for PostingsIterator<'_> {
    fn read(&mut self) -> Option<DocId> {
        self.advance()
    }

    fn skip_to(&mut self, target: DocId) -> Option<DocId> {
        if let Some(current) = &self.current {
            if current.doc_id >= target {
                return Some(current.doc_id);
            }
        }

        let remaining = &self.postings[self.next..];
        self.next += remaining.partition_point(|p| p.doc_id < target);
        self.advance()
    }

    fn current(&self) -> Option<&IndexResult> {
        self.current.as_ref()
    }

    fn rewind(&mut self) {
        self.next = 0;
        self.current = None;
    }

    fn estimate(&self) -> usize {
        self.postings.len()
    }

    fn kind(&self) -> &'static str {
        "postings"
    }
}

//! Core types shared by the index and the query iterators

use std::fmt;

use crate::schema::{FieldId, FieldMask};

/// Internal document identifier
///
/// Assigned monotonically starting at 1 and never reused, so a deleted
/// document's id may still appear in posting lists as a stale entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub u64);

impl DocId {
    pub const FIRST: DocId = DocId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc_{}", self.0)
    }
}

/// Term positions of one field within a posting
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPositions {
    pub field: FieldId,
    pub positions: Vec<u32>,
}

/// A single posting entry within a term's posting list
#[derive(Clone, Debug, PartialEq)]
pub struct Posting {
    pub doc_id: DocId,
    /// Fields the term occurs in
    pub field_mask: FieldMask,
    pub fields: Vec<FieldPositions>,
}

impl Posting {
    pub fn new(doc_id: DocId) -> Self {
        Self {
            doc_id,
            field_mask: FieldMask::NONE,
            fields: Vec::new(),
        }
    }

    /// Record an occurrence of the term in `field` at `position`
    pub fn add_occurrence(&mut self, field: FieldId, position: u32) {
        self.field_mask |= field.mask();
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(entry) => entry.positions.push(position),
            None => self.fields.push(FieldPositions {
                field,
                positions: vec![position],
            }),
        }
    }

    /// Sorted positions within the fields selected by `mask`
    pub fn positions(&self, mask: FieldMask) -> Vec<u32> {
        let mut positions: Vec<u32> = self
            .fields
            .iter()
            .filter(|f| mask.contains(f.field))
            .flat_map(|f| f.positions.iter().copied())
            .collect();
        positions.sort_unstable();
        positions
    }
}

//! Document table
//!
//! Maps external document keys to dense internal ids and back:
//! - ids are handed out monotonically from 1 and never reused
//! - deleting a key frees its entry and records the id in a delete bitset
//! - posting lists are not rewritten on delete, so stale ids are expected
//!   and resolve to no key

use std::collections::HashMap;

use roaring::RoaringTreemap;

use super::types::DocId;
use crate::query::DocumentTable;

/// Per-document metadata
#[derive(Clone, Debug, PartialEq)]
pub struct DocEntry {
    pub key: String,
    pub score: f64,
    pub language: String,
}

/// Internal id allocation and key lookup for one index
#[derive(Clone, Debug, Default)]
pub struct DocTable {
    /// Slot `i` holds document id `i + 1`; `None` once deleted
    entries: Vec<Option<DocEntry>>,
    by_key: HashMap<String, DocId>,
    deleted: RoaringTreemap,
}

impl DocTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for `key`
    ///
    /// A live document under the same key must be deleted first.
    pub fn assign(&mut self, key: &str, score: f64, language: &str) -> DocId {
        debug_assert!(!self.by_key.contains_key(key));
        self.entries.push(Some(DocEntry {
            key: key.to_string(),
            score,
            language: language.to_string(),
        }));
        let id = DocId(self.entries.len() as u64);
        self.by_key.insert(key.to_string(), id);
        id
    }

    /// Delete the document under `key`, returning its id
    pub fn delete(&mut self, key: &str) -> Option<DocId> {
        let id = self.by_key.remove(key)?;
        if let Some(slot) = self.slot_mut(id) {
            *slot = None;
        }
        self.deleted.insert(id.as_u64());
        Some(id)
    }

    pub fn get(&self, id: DocId) -> Option<&DocEntry> {
        let index = id.as_u64().checked_sub(1)? as usize;
        self.entries.get(index)?.as_ref()
    }

    pub fn is_deleted(&self, id: DocId) -> bool {
        self.deleted.contains(id.as_u64())
    }

    /// Whether `id` was assigned and not deleted
    pub fn is_live(&self, id: DocId) -> bool {
        self.get(id).is_some()
    }

    /// Number of ids ever assigned
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of live documents
    pub fn live_count(&self) -> usize {
        self.by_key.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len() as usize
    }

    /// The id the next assigned document will get
    pub fn next_id(&self) -> DocId {
        DocId(self.entries.len() as u64 + 1)
    }

    fn slot_mut(&mut self, id: DocId) -> Option<&mut Option<DocEntry>> {
        let index = id.as_u64().checked_sub(1)? as usize;
        self.entries.get_mut(index)
    }
}

impl DocumentTable for DocTable {
    fn id_for(&self, key: &str) -> Option<DocId> {
        self.by_key.get(key).copied()
    }

    fn key_for(&self, id: DocId) -> Option<&str> {
        self.get(id).map(|entry| entry.key.as_str())
    }
}

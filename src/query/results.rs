//! Caller-facing handle over a compiled query

use tracing::trace;

use crate::index::DocId;

use super::accessor::DocumentTable;
use super::iterators::{IndexIterator, IndexResult};

/// Compiled query ready to be read
///
/// Borrows the index it was compiled against, so the index cannot change
/// while results are being read. Dropping the handle releases the whole
/// iterator tree.
pub struct ResultsIterator<'a> {
    root: Box<dyn IndexIterator + 'a>,
    docs: &'a dyn DocumentTable,
}

impl<'a> ResultsIterator<'a> {
    pub fn new(root: Box<dyn IndexIterator + 'a>, docs: &'a dyn DocumentTable) -> Self {
        Self { root, docs }
    }

    /// Next matching entry, or `None` at end of stream
    ///
    /// End of stream is sticky until [`rewind`](Self::rewind).
    pub fn read(&mut self) -> Option<&IndexResult> {
        self.root.read()?;
        self.root.current()
    }

    /// Restart from the first match without recompiling
    pub fn rewind(&mut self) {
        self.root.rewind();
    }

    /// Key of the next match that still resolves to a live document
    ///
    /// Ids of deleted or replaced documents are skipped.
    pub fn next_key(&mut self) -> Option<&'a str> {
        let docs = self.docs;
        while let Some(doc) = self.root.read() {
            match docs.key_for(doc) {
                Some(key) => return Some(key),
                None => trace!(%doc, "skipping stale document id"),
            }
        }
        None
    }

    /// Upper bound on the number of matches
    pub fn estimate(&self) -> usize {
        self.root.estimate()
    }
}

impl Iterator for ResultsIterator<'_> {
    type Item = DocId;

    fn next(&mut self) -> Option<DocId> {
        self.root.read()
    }
}

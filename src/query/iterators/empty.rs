use crate::index::DocId;

use super::{IndexIterator, IndexResult};

/// Iterator that never yields a document
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyIterator;

impl IndexIterator for EmptyIterator {
    fn read(&mut self) -> Option<DocId> {
        None
    }

    fn skip_to(&mut self, _target: DocId) -> Option<DocId> {
        None
    }

    fn current(&self) -> Option<&IndexResult> {
        None
    }

    fn rewind(&mut self) {}

    fn estimate(&self) -> usize {
        0
    }

    fn kind(&self) -> &'static str {
        "empty"
    }
}

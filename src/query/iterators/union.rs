//! K-way union merge

use crate::index::DocId;

use super::{IndexIterator, IndexResult};

/// Yields every document matched by any child, once, in ascending order
///
/// The result for a document merges the match data of every child
/// positioned on it.
pub struct UnionIterator<'a> {
    children: Vec<Box<dyn IndexIterator + 'a>>,
    /// Document each child is positioned on; `None` once a child is exhausted
    heads: Vec<Option<DocId>>,
    primed: bool,
    current: Option<IndexResult>,
}

impl<'a> UnionIterator<'a> {
    pub fn new(children: Vec<Box<dyn IndexIterator + 'a>>) -> Self {
        let heads = vec![None; children.len()];
        Self {
            children,
            heads,
            primed: false,
            current: None,
        }
    }

    /// Position on the smallest child head and merge the children sitting on it
    fn emit(&mut self) -> Option<DocId> {
        let Some(min) = self.heads.iter().flatten().min().copied() else {
            self.current = None;
            return None;
        };

        let mut result = IndexResult::new(min);
        for (child, head) in self.children.iter().zip(&self.heads) {
            if *head == Some(min) {
                if let Some(child_result) = child.current() {
                    result.merge(child_result);
                }
            }
        }
        self.current = Some(result);
        Some(min)
    }
}

impl IndexIterator for UnionIterator<'_> {
    fn read(&mut self) -> Option<DocId> {
        if !self.primed {
            for (child, head) in self.children.iter_mut().zip(self.heads.iter_mut()) {
                *head = child.read();
            }
            self.primed = true;
        } else if let Some(last) = self.current.as_ref().map(|r| r.doc_id) {
            for (child, head) in self.children.iter_mut().zip(self.heads.iter_mut()) {
                if *head == Some(last) {
                    *head = child.read();
                }
            }
        }
        self.emit()
    }

    fn skip_to(&mut self, target: DocId) -> Option<DocId> {
        if let Some(current) = &self.current {
            if current.doc_id >= target {
                return Some(current.doc_id);
            }
        }

        let primed = self.primed;
        for (child, head) in self.children.iter_mut().zip(self.heads.iter_mut()) {
            let behind = match *head {
                Some(doc) => doc < target,
                None => !primed,
            };
            if behind {
                *head = child.skip_to(target);
            }
        }
        self.primed = true;
        self.emit()
    }

    fn current(&self) -> Option<&IndexResult> {
        self.current.as_ref()
    }

    fn rewind(&mut self) {
        for child in &mut self.children {
            child.rewind();
        }
        self.heads.iter_mut().for_each(|head| *head = None);
        self.primed = false;
        self.current = None;
    }

    fn estimate(&self) -> usize {
        self.children.iter().map(|c| c.estimate()).sum()
    }

    fn kind(&self) -> &'static str {
        "union"
    }
}

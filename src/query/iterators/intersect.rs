//! Seek-driven intersection, optionally constrained to adjacent positions

use tracing::trace;

use crate::index::DocId;
use crate::query::nodes::positions_form_phrase;

use super::{IndexIterator, IndexResult};

/// Yields documents matched by every child
///
/// With `exact` set, a candidate also needs the children's positions to form
/// one contiguous run in child order. Children without positions (numeric
/// and tag matches) constrain the document but not the adjacency check.
pub struct IntersectIterator<'a> {
    children: Vec<Box<dyn IndexIterator + 'a>>,
    exact: bool,
    current: Option<IndexResult>,
    exhausted: bool,
}

impl<'a> IntersectIterator<'a> {
    pub fn new(children: Vec<Box<dyn IndexIterator + 'a>>, exact: bool) -> Self {
        Self {
            children,
            exact,
            current: None,
            exhausted: false,
        }
    }

    /// Find the first document `>= target` that satisfies every child
    fn find_from(&mut self, mut target: DocId) -> Option<DocId> {
        let n = self.children.len();
        if n == 0 {
            return self.finish();
        }

        loop {
            // round robin until n consecutive children agree on the target
            let mut agreed = 0;
            let mut i = 0;
            while agreed < n {
                match self.children[i].skip_to(target) {
                    None => return self.finish(),
                    Some(doc) if doc > target => {
                        target = doc;
                        agreed = 1;
                    }
                    Some(_) => agreed += 1,
                }
                i = (i + 1) % n;
            }

            if !self.exact || self.adjacent() {
                let mut result = IndexResult::new(target);
                for child in &self.children {
                    if let Some(child_result) = child.current() {
                        result.merge(child_result);
                    }
                }
                self.current = Some(result);
                return Some(target);
            }

            trace!(doc = %target, "positions not adjacent");
            target = target.next();
        }
    }

    fn adjacent(&self) -> bool {
        let positions: Vec<&[u32]> = self
            .children
            .iter()
            .filter_map(|child| child.current())
            .map(|result| result.positions.as_slice())
            .filter(|positions| !positions.is_empty())
            .collect();
        positions_form_phrase(&positions)
    }

    fn finish(&mut self) -> Option<DocId> {
        self.current = None;
        self.exhausted = true;
        None
    }
}

impl IndexIterator for IntersectIterator<'_> {
    fn read(&mut self) -> Option<DocId> {
        if self.exhausted {
            return None;
        }
        let target = self
            .current
            .as_ref()
            .map_or(DocId(0), |current| current.doc_id.next());
        self.find_from(target)
    }

    fn skip_to(&mut self, target: DocId) -> Option<DocId> {
        if self.exhausted {
            return None;
        }
        if let Some(current) = &self.current {
            if current.doc_id >= target {
                return Some(current.doc_id);
            }
        }
        self.find_from(target)
    }

    fn current(&self) -> Option<&IndexResult> {
        self.current.as_ref()
    }

    fn rewind(&mut self) {
        for child in &mut self.children {
            child.rewind();
        }
        self.current = None;
        self.exhausted = false;
    }

    fn estimate(&self) -> usize {
        self.children.iter().map(|c| c.estimate()).min().unwrap_or(0)
    }

    fn kind(&self) -> &'static str {
        "intersect"
    }
}

//! Phrase combinator - intersection of children, optionally with adjacency

use crate::query::ast::QueryNode;

/// Intersection of its children
///
/// With `exact` set, the children's term positions must also form one
/// contiguous increasing run in child order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhraseNode {
    pub children: Vec<QueryNode>,
    pub exact: bool,
}

impl PhraseNode {
    pub fn new(exact: bool) -> Self {
        Self {
            children: Vec::new(),
            exact,
        }
    }
}

/// Check whether one position per list forms a run `p, p+1, p+2, ...`
///
/// Each list must be sorted ascending. An empty slice of lists trivially matches.
pub fn positions_form_phrase(positions: &[&[u32]]) -> bool {
    let Some((first, rest)) = positions.split_first() else {
        return true;
    };

    first.iter().any(|&start| {
        rest.iter().enumerate().all(|(i, list)| {
            start
                .checked_add(i as u32 + 1)
                .map_or(false, |expected| list.binary_search(&expected).is_ok())
        })
    })
}

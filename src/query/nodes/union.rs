//! Union combinator

use crate::query::ast::QueryNode;

/// Union of its children's matches
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnionNode {
    pub children: Vec<QueryNode>,
}

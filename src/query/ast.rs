//! Query tree representation
//!
//! A query is an owned tree of [`QueryNode`]s. Leaf predicates (token, prefix,
//! numeric, lexical range, tag) are scoped to fields through a [`FieldMask`]
//! resolved from the schema at construction time; combinators (phrase, union)
//! own their children and keep the all-fields mask.
//!
//! ```rust
//! use quern::query::QueryNode;
//! use quern::schema::{FieldOptions, FieldTypes, Schema};
//!
//! let mut schema = Schema::new();
//! schema.create_field("title", FieldTypes::TEXT, FieldOptions::empty()).unwrap();
//!
//! let mut union = QueryNode::union();
//! union.add_child(QueryNode::token(&schema, Some("title"), "quick").unwrap()).unwrap();
//! union.add_child(QueryNode::token(&schema, Some("title"), "brown").unwrap()).unwrap();
//! assert_eq!(union.child_count().unwrap(), 2);
//! ```

use std::fmt;

use crate::schema::{FieldMask, Schema};
use crate::{QuernError, Result};

use super::nodes::{
    LexRangeNode, NumericFilter, PhraseNode, PrefixNode, TagNode, TokenNode, UnionNode,
};

/// Stable numeric codes of the node variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QueryNodeType {
    Phrase = 1,
    Union = 2,
    Token = 3,
    Numeric = 4,
    Prefix = 5,
    LexRange = 6,
    Tag = 7,
}

impl QueryNodeType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Phrase),
            2 => Some(Self::Union),
            3 => Some(Self::Token),
            4 => Some(Self::Numeric),
            5 => Some(Self::Prefix),
            6 => Some(Self::LexRange),
            7 => Some(Self::Tag),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phrase => "phrase",
            Self::Union => "union",
            Self::Token => "token",
            Self::Numeric => "numeric",
            Self::Prefix => "prefix",
            Self::LexRange => "lex_range",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for QueryNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant payload of a query node
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Token(TokenNode),
    Prefix(PrefixNode),
    Numeric(NumericFilter),
    LexRange(LexRangeNode),
    Tag(TagNode),
    Phrase(PhraseNode),
    Union(UnionNode),
}

/// One predicate or combinator in a query tree
///
/// A node exclusively owns its children; dropping the root frees the whole
/// tree exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNode {
    pub(crate) kind: NodeKind,
    pub(crate) field_mask: FieldMask,
}

impl QueryNode {
    fn new(kind: NodeKind, field_mask: FieldMask) -> Self {
        Self { kind, field_mask }
    }

    /// Exact term predicate, scoped to `field` or to all fields
    pub fn token(schema: &Schema, field: Option<&str>, text: &str) -> Result<Self> {
        let mask = schema.resolve(field)?;
        Ok(Self::new(NodeKind::Token(TokenNode::new(text)), mask))
    }

    /// Prefix predicate, scoped to `field` or to all fields
    pub fn prefix(schema: &Schema, field: Option<&str>, text: &str) -> Result<Self> {
        let mask = schema.resolve(field)?;
        Ok(Self::new(NodeKind::Prefix(PrefixNode::new(text)), mask))
    }

    /// Numeric range predicate on a numeric field
    pub fn numeric(
        schema: &Schema,
        field: &str,
        min: f64,
        max: f64,
        include_min: bool,
        include_max: bool,
    ) -> Result<Self> {
        let field_id = schema.field_id(field)?;
        let filter = NumericFilter {
            field: field.to_string(),
            field_id,
            min,
            max,
            include_min,
            include_max,
        };
        Ok(Self::new(NodeKind::Numeric(filter), field_id.mask()))
    }

    /// Lexicographic range predicate; missing bounds are open
    pub fn lex_range(
        schema: &Schema,
        field: Option<&str>,
        begin: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self> {
        let mask = schema.resolve(field)?;
        Ok(Self::new(
            NodeKind::LexRange(LexRangeNode::new(begin, end)),
            mask,
        ))
    }

    /// Tag predicate on `field` with no values yet
    pub fn tag(schema: &Schema, field: &str) -> Result<Self> {
        let field_id = schema.field_id(field)?;
        Ok(Self::new(
            NodeKind::Tag(TagNode::new(field, field_id)),
            field_id.mask(),
        ))
    }

    /// Intersection of children; `exact` also requires adjacency in child order
    pub fn phrase(exact: bool) -> Self {
        Self::new(NodeKind::Phrase(PhraseNode::new(exact)), FieldMask::ALL)
    }

    /// Union of children
    pub fn union() -> Self {
        Self::new(NodeKind::Union(UnionNode::default()), FieldMask::ALL)
    }

    /// Append `child`, taking ownership of it
    ///
    /// Only phrase, union and tag nodes accept children.
    pub fn add_child(&mut self, child: QueryNode) -> Result<()> {
        let node_type = self.node_type();
        match &mut self.kind {
            NodeKind::Phrase(PhraseNode { children, .. })
            | NodeKind::Union(UnionNode { children })
            | NodeKind::Tag(TagNode { children, .. }) => {
                children.push(child);
                Ok(())
            }
            _ => Err(QuernError::InvalidOperation(format!(
                "cannot add a child to a {} node",
                node_type
            ))),
        }
    }

    /// Detach all children of a phrase or union node and hand them back
    pub fn clear_children(&mut self) -> Result<Vec<QueryNode>> {
        let children = self.container_mut("clear children of")?;
        Ok(std::mem::take(children))
    }

    /// Number of children of a phrase or union node
    pub fn child_count(&self) -> Result<usize> {
        self.container("count children of").map(<[QueryNode]>::len)
    }

    /// Child at `index` of a phrase or union node
    pub fn child(&self, index: usize) -> Result<&QueryNode> {
        let children = self.container("get a child of")?;
        children.get(index).ok_or(QuernError::ChildIndexOutOfRange {
            index,
            len: children.len(),
        })
    }

    pub fn field_mask(&self) -> FieldMask {
        self.field_mask
    }

    pub fn node_type(&self) -> QueryNodeType {
        match &self.kind {
            NodeKind::Token(_) => QueryNodeType::Token,
            NodeKind::Prefix(_) => QueryNodeType::Prefix,
            NodeKind::Numeric(_) => QueryNodeType::Numeric,
            NodeKind::LexRange(_) => QueryNodeType::LexRange,
            NodeKind::Tag(_) => QueryNodeType::Tag,
            NodeKind::Phrase(_) => QueryNodeType::Phrase,
            NodeKind::Union(_) => QueryNodeType::Union,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Total number of nodes in this subtree, tag values included
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(QueryNode::node_count).sum::<usize>()
    }

    pub(crate) fn children(&self) -> &[QueryNode] {
        match &self.kind {
            NodeKind::Phrase(PhraseNode { children, .. })
            | NodeKind::Union(UnionNode { children })
            | NodeKind::Tag(TagNode { children, .. }) => children,
            _ => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [QueryNode] {
        match &mut self.kind {
            NodeKind::Phrase(PhraseNode { children, .. })
            | NodeKind::Union(UnionNode { children })
            | NodeKind::Tag(TagNode { children, .. }) => children,
            _ => &mut [],
        }
    }

    fn container(&self, action: &str) -> Result<&[QueryNode]> {
        match &self.kind {
            NodeKind::Phrase(PhraseNode { children, .. })
            | NodeKind::Union(UnionNode { children }) => Ok(children),
            _ => Err(QuernError::InvalidOperation(format!(
                "cannot {} a {} node",
                action,
                self.node_type()
            ))),
        }
    }

    fn container_mut(&mut self, action: &str) -> Result<&mut Vec<QueryNode>> {
        let node_type = self.node_type();
        match &mut self.kind {
            NodeKind::Phrase(PhraseNode { children, .. })
            | NodeKind::Union(UnionNode { children }) => Ok(children),
            _ => Err(QuernError::InvalidOperation(format!(
                "cannot {} a {} node",
                action, node_type
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldId, FieldOptions, FieldTypes};

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema
            .create_field("title", FieldTypes::TEXT, FieldOptions::empty())
            .unwrap();
        schema
            .create_field("price", FieldTypes::NUMERIC, FieldOptions::empty())
            .unwrap();
        schema
            .create_field("color", FieldTypes::TAG, FieldOptions::empty())
            .unwrap();
        schema
    }

    #[test]
    fn test_leaf_field_masks() {
        let schema = schema();

        let scoped = QueryNode::token(&schema, Some("title"), "quick").unwrap();
        assert_eq!(scoped.field_mask(), FieldId(0).mask());
        assert_eq!(scoped.node_type(), QueryNodeType::Token);

        let unscoped = QueryNode::prefix(&schema, None, "qu").unwrap();
        assert!(unscoped.field_mask().is_all());

        let numeric = QueryNode::numeric(&schema, "price", 1.0, 2.0, true, true).unwrap();
        assert_eq!(numeric.field_mask(), FieldId(1).mask());

        let tag = QueryNode::tag(&schema, "color").unwrap();
        assert_eq!(tag.field_mask(), FieldId(2).mask());
        assert_eq!(tag.node_type().code(), 7);
    }

    #[test]
    fn test_unknown_field() {
        let schema = schema();
        assert_eq!(
            QueryNode::token(&schema, Some("body"), "x"),
            Err(QuernError::UnknownField("body".to_string()))
        );
        assert!(QueryNode::tag(&schema, "size").is_err());
        assert!(QueryNode::numeric(&schema, "weight", 0.0, 1.0, true, true).is_err());
    }

    #[test]
    fn test_children_in_insertion_order() {
        let schema = schema();
        let mut phrase = QueryNode::phrase(true);
        for word in ["the", "quick", "fox"] {
            phrase
                .add_child(QueryNode::token(&schema, Some("title"), word).unwrap())
                .unwrap();
        }

        assert_eq!(phrase.child_count().unwrap(), 3);
        for (i, word) in ["the", "quick", "fox"].iter().enumerate() {
            match phrase.child(i).unwrap().kind() {
                NodeKind::Token(token) => assert_eq!(token.text, *word),
                other => panic!("unexpected node {:?}", other),
            }
        }
        assert_eq!(
            phrase.child(3),
            Err(QuernError::ChildIndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(phrase.node_count(), 4);
    }

    #[test]
    fn test_add_child_to_leaf_fails() {
        let schema = schema();
        let mut token = QueryNode::token(&schema, None, "quick").unwrap();
        let err = token.add_child(QueryNode::union()).unwrap_err();
        assert!(matches!(err, QuernError::InvalidOperation(_)));
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_tag_accepts_children_but_hides_them() {
        let schema = schema();
        let mut tag = QueryNode::tag(&schema, "color").unwrap();
        tag.add_child(QueryNode::token(&schema, None, "red").unwrap())
            .unwrap();
        assert_eq!(tag.node_count(), 2);
        assert!(tag.child_count().is_err());
        assert!(tag.clear_children().is_err());
    }

    #[test]
    fn test_clear_children_detaches() {
        let schema = schema();
        let mut union = QueryNode::union();
        union
            .add_child(QueryNode::token(&schema, None, "a").unwrap())
            .unwrap();
        union
            .add_child(QueryNode::token(&schema, None, "b").unwrap())
            .unwrap();

        let detached = union.clear_children().unwrap();
        assert_eq!(detached.len(), 2);
        assert_eq!(union.child_count().unwrap(), 0);

        for child in detached {
            union.add_child(child).unwrap();
        }
        assert_eq!(union.child_count().unwrap(), 2);
    }

    #[test]
    fn test_node_type_codes() {
        for code in 1..=7 {
            assert_eq!(QueryNodeType::from_code(code).unwrap().code(), code);
        }
        assert_eq!(QueryNodeType::from_code(0), None);
        assert_eq!(QueryNodeType::Phrase.code(), 1);
        assert_eq!(QueryNodeType::LexRange.to_string(), "lex_range");
    }
}

//! Tag container - matches any child value against one tag field

use crate::query::ast::QueryNode;
use crate::schema::FieldId;

/// Tag predicate; children describe the tag values to match
#[derive(Clone, Debug, PartialEq)]
pub struct TagNode {
    pub field: String,
    pub field_id: FieldId,
    pub children: Vec<QueryNode>,
}

impl TagNode {
    pub fn new(field: impl Into<String>, field_id: FieldId) -> Self {
        Self {
            field: field.into(),
            field_id,
            children: Vec::new(),
        }
    }
}

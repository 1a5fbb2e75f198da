//! Numeric field index
//!
//! Each distinct value maps to the set of documents holding it, so a range
//! query is an ordered scan over values followed by a bitmap union.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;

use ordered_float::OrderedFloat;
use roaring::RoaringTreemap;

use super::types::DocId;
use crate::query::nodes::NumericFilter;

/// Value-ordered doc-id sets for one numeric field
#[derive(Clone, Debug, Default)]
pub struct NumericIndex {
    values: BTreeMap<OrderedFloat<f64>, RoaringTreemap>,
}

impl NumericIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64, doc_id: DocId) {
        self.values
            .entry(OrderedFloat(value))
            .or_default()
            .insert(doc_id.as_u64());
    }

    /// Documents whose value lies inside `filter`
    pub fn range(&self, filter: &NumericFilter) -> RoaringTreemap {
        let mut out = RoaringTreemap::new();
        match filter.min.partial_cmp(&filter.max) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) if filter.include_min && filter.include_max => {}
            _ => return out,
        }

        let lower = if filter.include_min {
            Bound::Included(OrderedFloat(filter.min))
        } else {
            Bound::Excluded(OrderedFloat(filter.min))
        };
        let upper = if filter.include_max {
            Bound::Included(OrderedFloat(filter.max))
        } else {
            Bound::Excluded(OrderedFloat(filter.max))
        };

        for (_, ids) in self.values.range((lower, upper)) {
            out |= ids;
        }
        out
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

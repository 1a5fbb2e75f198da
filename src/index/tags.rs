//! Tag field index
//!
//! Tag values are split on the field's separator, trimmed and lowercased,
//! then matched whole. Query-side lookups normalize the same way.

use std::collections::BTreeMap;
use std::ops::Bound;

use roaring::RoaringTreemap;

use super::types::DocId;

/// Normalize one tag value
pub fn normalize_tag(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a raw field value into normalized tags, dropping empty ones
pub fn split_tags(text: &str, separator: char) -> impl Iterator<Item = String> + '_ {
    text.split(separator)
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
}

/// Tag value to doc-id sets for one tag field
#[derive(Clone, Debug, Default)]
pub struct TagIndex {
    values: BTreeMap<String, RoaringTreemap>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every tag in `text` for `doc_id`
    pub fn add(&mut self, text: &str, separator: char, doc_id: DocId) {
        for tag in split_tags(text, separator) {
            self.values.entry(tag).or_default().insert(doc_id.as_u64());
        }
    }

    pub fn get(&self, value: &str) -> Option<&RoaringTreemap> {
        self.values.get(&normalize_tag(value))
    }

    /// Values starting with `prefix`, ascending, at most `limit`
    pub fn prefix_values(&self, prefix: &str, limit: Option<usize>) -> Vec<&str> {
        let prefix = normalize_tag(prefix);
        self.values
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .map(|(value, _)| value.as_str())
            .take_while(|value| value.starts_with(prefix.as_str()))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Values inside the inclusive range
    pub fn range_values(&self, begin: Option<&str>, end: Option<&str>) -> Vec<&str> {
        let begin = begin.map(normalize_tag);
        let end = end.map(normalize_tag);
        if let (Some(begin), Some(end)) = (&begin, &end) {
            if begin > end {
                return Vec::new();
            }
        }

        let lower = begin.as_deref().map_or(Bound::Unbounded, Bound::Included);
        let upper = end.as_deref().map_or(Bound::Unbounded, Bound::Included);
        self.values
            .range::<str, _>((lower, upper))
            .map(|(value, _)| value.as_str())
            .collect()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

//! Numeric range predicate over a numeric field

use crate::schema::FieldId;

/// Numeric range filter
///
/// `min > max` is legal and simply never matches.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericFilter {
    pub field: String,
    pub field_id: FieldId,
    pub min: f64,
    pub max: f64,
    pub include_min: bool,
    pub include_max: bool,
}

impl NumericFilter {
    /// Whether `value` falls inside the range
    pub fn contains(&self, value: f64) -> bool {
        let above = if self.include_min {
            value >= self.min
        } else {
            value > self.min
        };
        let below = if self.include_max {
            value <= self.max
        } else {
            value < self.max
        };
        above && below
    }
}

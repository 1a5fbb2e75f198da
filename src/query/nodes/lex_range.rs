//! Lexicographic range predicate

/// Lexicographic term range; a missing bound is unbounded and present bounds are inclusive
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexRangeNode {
    pub begin: Option<String>,
    pub end: Option<String>,
}

impl LexRangeNode {
    pub fn new(begin: Option<&str>, end: Option<&str>) -> Self {
        Self {
            begin: begin.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        let after_begin = self.begin.as_deref().map_or(true, |b| term >= b);
        let before_end = self.end.as_deref().map_or(true, |e| term <= e);
        after_begin && before_end
    }
}

//! Prefix predicate - matches every term starting with a prefix

/// Prefix-match predicate
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixNode {
    pub text: String,
    pub expanded: bool,
}

impl PrefixNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expanded: false,
        }
    }

    pub fn matches(&self, term: &str) -> bool {
        term.starts_with(self.text.as_str())
    }
}

//! Token predicate - exact match on a normalized term

/// Exact-match predicate
///
/// After the expansion pass, `expansions` holds alternative index terms
/// (stem markers, for instance) that also satisfy the predicate.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenNode {
    pub text: String,
    pub expanded: bool,
    pub expansions: Vec<String>,
}

impl TokenNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expanded: false,
            expansions: Vec::new(),
        }
    }

    /// Append an alternative term, ignoring duplicates
    pub fn add_expansion(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.text && !self.expansions.contains(&term) {
            self.expansions.push(term);
        }
    }

    /// The original term followed by its expansions
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.text.as_str()).chain(self.expansions.iter().map(String::as_str))
    }
}

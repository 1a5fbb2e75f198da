//! Text analysis for indexing and query expansion

mod tokenizer;

pub use tokenizer::{stem_word, stemming_algorithm, Tokenizer};

/// Leading marker distinguishing indexed stems from surface terms
pub const STEM_MARKER: char = '+';

/// Index term under which the stem of a surface term is stored
pub fn stem_term(stem: &str) -> String {
    let mut term = String::with_capacity(stem.len() + 1);
    term.push(STEM_MARKER);
    term.push_str(stem);
    term
}

/// Whether an index term is a stem marker rather than a surface term
pub fn is_stem_term(term: &str) -> bool {
    term.starts_with(STEM_MARKER)
}

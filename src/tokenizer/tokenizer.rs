use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TokenizerConfig;

/// Map a language name to its snowball algorithm, falling back to English
pub fn stemming_algorithm(language: &str) -> Algorithm {
    match language.to_lowercase().as_str() {
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        _ => Algorithm::English,
    }
}

/// Stem a normalized term, returning `None` when the stem is the term itself
pub fn stem_word(stemmer: &Stemmer, term: &str) -> Option<String> {
    let stemmed = stemmer.stem(term);
    if stemmed.is_empty() || stemmed == term {
        None
    } else {
        Some(stemmed.into_owned())
    }
}

/// Text tokenizer producing positioned terms
pub struct Tokenizer {
    config: TokenizerConfig,
    stemmer: Stemmer,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        let stopwords = if config.remove_stopwords {
            get(LANGUAGE::English)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect()
        } else {
            HashSet::new()
        };

        Self {
            config: config.clone(),
            stemmer: Stemmer::create(stemming_algorithm(&config.language)),
            stopwords,
        }
    }

    /// Normalize a single term the way indexed terms are normalized
    pub fn normalize(&self, term: &str) -> String {
        if self.config.lowercase {
            term.to_lowercase()
        } else {
            term.to_string()
        }
    }

    /// Stem a normalized term, returning `None` when the stem is the term itself
    pub fn stem(&self, term: &str) -> Option<String> {
        stem_word(&self.stemmer, term)
    }

    /// Tokenize and return (term, position) pairs in order
    ///
    /// Positions are 0-indexed and count every word, so dropped tokens
    /// (stopwords, out-of-bounds lengths) still advance the position.
    pub fn tokenize(&self, text: &str) -> Vec<(String, u32)> {
        let mut results = Vec::new();

        for (pos, word) in text.unicode_words().enumerate() {
            let token = self.normalize(word);
            let len = token.chars().count();

            if len < self.config.min_token_length || len > self.config.max_token_length {
                continue;
            }
            if self.stopwords.contains(&token) {
                continue;
            }

            results.push((token, pos as u32));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TokenizerConfig {
        TokenizerConfig {
            lowercase: true,
            remove_stopwords: false,
            min_token_length: 1,
            max_token_length: 50,
            language: "english".to_string(),
        }
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new(&config());
        let tokens = tokenizer.tokenize("The Quick brown fox!");

        assert_eq!(
            tokens,
            vec![
                ("the".to_string(), 0),
                ("quick".to_string(), 1),
                ("brown".to_string(), 2),
                ("fox".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_stopwords_keep_positions() {
        let tokenizer = Tokenizer::new(&TokenizerConfig {
            remove_stopwords: true,
            ..config()
        });
        let tokens = tokenizer.tokenize("rust the programming");

        assert_eq!(tokens[0], ("rust".to_string(), 0));
        assert_eq!(tokens[1], ("programming".to_string(), 2));
        assert!(tokens.iter().all(|(t, _)| t != "the"));
    }

    #[test]
    fn test_min_max_token_length() {
        let tokenizer = Tokenizer::new(&TokenizerConfig {
            min_token_length: 3,
            max_token_length: 5,
            ..config()
        });
        let terms: Vec<String> = tokenizer
            .tokenize("a ab abc abcd abcde abcdef")
            .into_iter()
            .map(|(t, _)| t)
            .collect();

        assert_eq!(terms, vec!["abc", "abcd", "abcde"]);
    }

    #[test]
    fn test_case_preserved_without_lowercase() {
        let tokenizer = Tokenizer::new(&TokenizerConfig {
            lowercase: false,
            ..config()
        });
        assert_eq!(tokenizer.normalize("Rust"), "Rust");
    }

    #[test]
    fn test_stem() {
        let tokenizer = Tokenizer::new(&config());
        assert_eq!(tokenizer.stem("running"), Some("run".to_string()));
        assert_eq!(tokenizer.stem("fox"), None);
    }

    #[test]
    fn test_stemming_algorithm_fallback() {
        assert!(matches!(stemming_algorithm("French"), Algorithm::French));
        assert!(matches!(stemming_algorithm("klingon"), Algorithm::English));
    }
}

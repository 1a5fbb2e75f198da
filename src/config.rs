use serde::{Deserialize, Serialize};

use crate::Result;

/// Index settings configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    pub tokenizer: TokenizerConfig,
    /// Shortest prefix a prefix predicate may expand
    pub min_prefix: usize,
    /// Maximum number of dictionary terms a prefix expands to (None = unlimited)
    pub max_prefix_expansions: Option<usize>,
    /// Separator used for tag fields that don't set their own
    pub default_tag_separator: char,
    /// Run the stemming expansion pass before compiling queries
    pub stemming: bool,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            min_prefix: 0,
            max_prefix_expansions: None,
            default_tag_separator: ',',
            stemming: true,
        }
    }
}

impl IndexSettings {
    /// Load settings from a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the minimum prefix length
    pub fn with_min_prefix(mut self, min_prefix: usize) -> Self {
        self.min_prefix = min_prefix;
        self
    }

    /// Cap prefix expansion
    pub fn with_max_prefix_expansions(mut self, max: usize) -> Self {
        self.max_prefix_expansions = Some(max);
        self
    }

    /// Enable or disable the stemming expansion pass
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }

    /// Set the default tag separator
    pub fn with_tag_separator(mut self, separator: char) -> Self {
        self.default_tag_separator = separator;
        self
    }

    /// Replace the tokenizer configuration
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
    pub language: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            // Phrase predicates address every token, stopwords included
            remove_stopwords: false,
            min_token_length: 1,
            max_token_length: 64,
            language: "english".to_string(),
        }
    }
}

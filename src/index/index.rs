//! In-memory search index
//!
//! Owns the schema, the document table and one inverted structure per kind
//! of field:
//! - text values go to the positional term index, with stem markers for
//!   stemmed fields
//! - numeric values go to a per-field value map
//! - tag values go to a per-field tag map
//!
//! Deleting a document only removes it from the document table. Its id stays
//! behind in the inverted structures and is skipped when results resolve keys.

use std::borrow::Cow;
use std::collections::HashMap;

use rust_stemmers::{Algorithm, Stemmer};
use tracing::{debug, trace};

use super::doc_table::DocTable;
use super::numeric::NumericIndex;
use super::tags::TagIndex;
use super::terms::TermIndex;
use super::types::DocId;
use crate::config::IndexSettings;
use crate::models::Document;
use crate::query::iterators::{BitmapIterator, IndexIterator, PostingsIterator};
use crate::query::nodes::NumericFilter;
use crate::query::{
    PostingsProvider, QueryCompiler, QueryExpander, QueryNode, ResultsIterator, StemmingExpander,
};
use crate::schema::{FieldId, FieldMask, FieldOptions, FieldTypes, Schema};
use crate::tokenizer::{stem_term, stem_word, stemming_algorithm, Tokenizer};
use crate::Result;

/// Positions skipped between consecutive text fields of a document
pub const FIELD_POSITION_GAP: u32 = 100;

/// A named, in-memory index
pub struct Index {
    name: String,
    settings: IndexSettings,
    schema: Schema,
    tokenizer: Tokenizer,
    expander: StemmingExpander,
    /// One stemmer per document language seen so far
    stemmers: Vec<(Algorithm, Stemmer)>,
    docs: DocTable,
    terms: TermIndex,
    numeric: HashMap<FieldId, NumericIndex>,
    tags: HashMap<FieldId, TagIndex>,
}

impl Index {
    pub fn new(name: impl Into<String>, settings: IndexSettings) -> Self {
        let name = name.into();
        debug!(index = %name, ?settings, "creating index");
        Self {
            tokenizer: Tokenizer::new(&settings.tokenizer),
            expander: StemmingExpander::new(&settings.tokenizer.language),
            stemmers: Vec::new(),
            name,
            settings,
            schema: Schema::new(),
            docs: DocTable::new(),
            terms: TermIndex::new(),
            numeric: HashMap::new(),
            tags: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn docs(&self) -> &DocTable {
        &self.docs
    }

    /// Register a field
    pub fn create_field(
        &mut self,
        name: &str,
        types: FieldTypes,
        options: FieldOptions,
    ) -> Result<FieldId> {
        self.schema.create_field(name, types, options)
    }

    pub fn set_text_weight(&mut self, field: &str, weight: f64) -> Result<()> {
        self.schema.set_text_weight(field, weight)
    }

    pub fn set_tag_separator(&mut self, field: &str, separator: char) -> Result<()> {
        self.schema.set_tag_separator(field, separator)
    }

    /// Index a document, replacing any live document with the same key
    pub fn add_document(&mut self, doc: Document) -> Result<DocId> {
        if let Some(old) = self.docs.delete(&doc.key) {
            debug!(index = %self.name, key = %doc.key, %old, "replacing document");
        }
        let id = self.docs.assign(&doc.key, doc.score, &doc.language);
        let stemmer = self.stemmer_slot(stemming_algorithm(&doc.language));

        let mut next_position = 0u32;
        for field in &doc.fields {
            let Some(def) = self.schema.field(&field.name) else {
                debug!(index = %self.name, field = %field.name, "ignoring unknown field");
                continue;
            };
            if !def.is_indexable() {
                continue;
            }

            let field_id = def.id;
            let stemmed = def.is_stemmed();
            let separator = def
                .tag_separator
                .unwrap_or(self.settings.default_tag_separator);
            let types = if field.index_as.is_empty() {
                def.types
            } else {
                def.types & field.index_as
            };

            if types.contains(FieldTypes::TEXT) {
                let text = field.value.as_text();
                let stemmer = stemmed.then_some(stemmer);
                next_position = self.index_text(id, field_id, stemmer, &text, next_position);
            }

            if types.contains(FieldTypes::NUMERIC) {
                match field.value.as_number() {
                    Some(value) => self.numeric.entry(field_id).or_default().add(value, id),
                    None => debug!(field = %field.name, "value is not numeric, skipping"),
                }
            }

            if types.contains(FieldTypes::TAG) {
                let text = field.value.as_text();
                self.tags
                    .entry(field_id)
                    .or_default()
                    .add(&text, separator, id);
            }

            if types.contains(FieldTypes::GEO) {
                trace!(field = %field.name, "geo values are not indexed");
            }
        }

        trace!(index = %self.name, key = %doc.key, %id, "indexed document");
        Ok(id)
    }

    /// Slot of the cached stemmer for `algorithm`, creating it on first use
    fn stemmer_slot(&mut self, algorithm: Algorithm) -> usize {
        if let Some(slot) = self.stemmers.iter().position(|(a, _)| *a == algorithm) {
            return slot;
        }
        debug!(index = %self.name, ?algorithm, "creating stemmer");
        self.stemmers.push((algorithm, Stemmer::create(algorithm)));
        self.stemmers.len() - 1
    }

    /// Index one text value starting at `base`, returning the base for the next field
    ///
    /// `stemmer` is the cached stemmer slot for the document language, or
    /// `None` when the field is not stemmed.
    fn index_text(
        &mut self,
        id: DocId,
        field: FieldId,
        stemmer: Option<usize>,
        text: &str,
        base: u32,
    ) -> u32 {
        let mut last = None;
        for (token, offset) in self.tokenizer.tokenize(text) {
            let position = base + offset;
            self.terms.add(&token, id, field, position);
            if let Some(slot) = stemmer {
                if let Some(stem) = stem_word(&self.stemmers[slot].1, &token) {
                    self.terms.add(&stem_term(&stem), id, field, position);
                }
            }
            last = Some(position);
        }

        match last {
            Some(position) => position + 1 + FIELD_POSITION_GAP,
            None => base,
        }
    }

    /// Delete the document under `key`; returns whether one existed
    pub fn drop_document(&mut self, key: &str) -> bool {
        let deleted = self.docs.delete(key);
        if let Some(id) = deleted {
            debug!(index = %self.name, key, %id, "deleted document");
        }
        deleted.is_some()
    }

    /// Number of live documents
    pub fn num_docs(&self) -> usize {
        self.docs.live_count()
    }

    /// Number of distinct dictionary terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Expand and compile `root` into a results handle, consuming the tree
    pub fn compile(&self, mut root: QueryNode) -> ResultsIterator<'_> {
        if self.settings.stemming {
            self.expander.expand(&mut root, &self.schema);
        }
        let compiler = QueryCompiler::from_settings(self, &self.settings);
        ResultsIterator::new(compiler.compile(root), &self.docs)
    }
}

impl PostingsProvider for Index {
    fn term_iterator(&self, term: &str, mask: FieldMask) -> Option<Box<dyn IndexIterator + '_>> {
        let postings = self.terms.postings(term)?;
        Some(Box::new(PostingsIterator::new(postings, mask)))
    }

    fn prefix_terms(&self, prefix: &str, limit: Option<usize>) -> Vec<&str> {
        self.terms.prefix_terms(prefix, limit)
    }

    fn range_terms(&self, begin: Option<&str>, end: Option<&str>) -> Vec<&str> {
        self.terms.range_terms(begin, end)
    }

    fn numeric_iterator(&self, filter: &NumericFilter) -> Option<Box<dyn IndexIterator + '_>> {
        let ids = self.numeric.get(&filter.field_id)?.range(filter);
        if ids.is_empty() {
            return None;
        }
        Some(Box::new(BitmapIterator::new(
            Cow::Owned(ids),
            filter.field_id.mask(),
        )))
    }

    fn tag_iterator(&self, field: FieldId, value: &str) -> Option<Box<dyn IndexIterator + '_>> {
        let ids = self.tags.get(&field)?.get(value)?;
        Some(Box::new(BitmapIterator::new(Cow::Borrowed(ids), field.mask())))
    }

    fn tag_prefix_values(&self, field: FieldId, prefix: &str, limit: Option<usize>) -> Vec<&str> {
        self.tags
            .get(&field)
            .map(|tags| tags.prefix_values(prefix, limit))
            .unwrap_or_default()
    }

    fn tag_range_values(
        &self,
        field: FieldId,
        begin: Option<&str>,
        end: Option<&str>,
    ) -> Vec<&str> {
        self.tags
            .get(&field)
            .map(|tags| tags.range_values(begin, end))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("name", &self.name)
            .field("fields", &self.schema.len())
            .field("docs", &self.docs.live_count())
            .field("terms", &self.terms.len())
            .finish()
    }
}

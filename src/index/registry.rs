//! Registry of named indexes
//!
//! The only structure shared across threads. Each index sits behind its own
//! lock, so readers of one index never wait on writers of another.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::index::Index;
use crate::config::IndexSettings;
use crate::{QuernError, Result};

/// Shared handle to one index
pub type IndexRef = Arc<RwLock<Index>>;

/// Named indexes owned by the embedding application
#[derive(Default)]
pub struct IndexRegistry {
    indexes: RwLock<HashMap<String, IndexRef>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index under `name`
    pub fn create_index(&self, name: &str, settings: IndexSettings) -> Result<IndexRef> {
        let mut indexes = self.indexes.write();
        if indexes.contains_key(name) {
            return Err(QuernError::IndexAlreadyExists(name.to_string()));
        }

        let index = Arc::new(RwLock::new(Index::new(name, settings)));
        indexes.insert(name.to_string(), Arc::clone(&index));
        info!(index = name, "index created");
        Ok(index)
    }

    pub fn get(&self, name: &str) -> Option<IndexRef> {
        self.indexes.read().get(name).cloned()
    }

    /// Remove an index; outstanding handles keep it alive until dropped
    pub fn drop_index(&self, name: &str) -> Result<()> {
        match self.indexes.write().remove(name) {
            Some(_) => {
                info!(index = name, "index dropped");
                Ok(())
            }
            None => Err(QuernError::IndexNotFound(name.to_string())),
        }
    }

    /// Names of all indexes, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.indexes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use crate::schema::{FieldOptions, FieldTypes};

    #[test]
    fn test_create_and_get() {
        let registry = IndexRegistry::new();
        let index = registry.create_index("products", IndexSettings::default()).unwrap();
        index
            .write()
            .create_field("title", FieldTypes::TEXT, FieldOptions::empty())
            .unwrap();

        let again = registry.get("products").unwrap();
        assert_eq!(again.read().schema().len(), 1);
        assert_eq!(again.read().name(), "products");
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_index() {
        let registry = IndexRegistry::new();
        registry.create_index("a", IndexSettings::default()).unwrap();
        assert_eq!(
            registry.create_index("a", IndexSettings::default()).unwrap_err(),
            QuernError::IndexAlreadyExists("a".to_string())
        );
    }

    #[test]
    fn test_drop_index() {
        let registry = IndexRegistry::new();
        let handle = registry.create_index("a", IndexSettings::default()).unwrap();
        registry.create_index("b", IndexSettings::default()).unwrap();
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);

        registry.drop_index("a").unwrap();
        assert_eq!(
            registry.drop_index("a"),
            Err(QuernError::IndexNotFound("a".to_string()))
        );
        assert_eq!(registry.len(), 1);

        // the dropped index outlives the registry entry
        handle
            .write()
            .add_document(Document::new("doc:1", 1.0, None))
            .unwrap();
        assert_eq!(handle.read().num_docs(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(IndexRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .create_index(&format!("index-{}", i), IndexSettings::default())
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 4);
    }
}

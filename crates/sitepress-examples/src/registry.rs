//! By-key lookup of demo documents.

use std::collections::HashMap;

use crate::document::ExampleDoc;

/// A write-once registry of demo documents.
///
/// Populated during construction, read-many thereafter: no mutation is
/// exposed once built, so shared `&` reads from parallel page-render
/// workers need no synchronization.
#[derive(Debug, Default)]
pub struct ExampleRegistry {
    /// Documents by key
    entries: HashMap<String, ExampleDoc>,

    /// Keys in first-insertion order
    order: Vec<String>,
}

impl ExampleRegistry {
    /// Build a registry from (key, document) pairs.
    ///
    /// Duplicate keys shadow: the last document wins, and the key keeps
    /// its first position in [`keys`](Self::keys). This mirrors how a
    /// plain object literal behaves in the authored source and is
    /// intentional, not an error.
    pub fn from_entries<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, ExampleDoc)>,
        K: Into<String>,
    {
        let mut entries = HashMap::new();
        let mut order = Vec::new();

        for (key, doc) in pairs {
            let key = key.into();
            if entries.insert(key.clone(), doc).is_some() {
                tracing::warn!("Demo key '{}' registered twice; last write wins", key);
            } else {
                order.push(key);
            }
        }

        Self { entries, order }
    }

    /// Look up a document by key.
    pub fn get(&self, key: &str) -> Result<&ExampleDoc, RegistryError> {
        self.entries
            .get(key)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    /// Check whether a key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All registered keys, in first-insertion order.
    ///
    /// Finite and restartable; used at build time to verify that every
    /// key a page references actually exists.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An unregistered key was requested. Fatal to the build: a silent
    /// empty string would publish a page with a missing demo.
    #[error("Demo not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ExampleRegistry {
        ExampleRegistry::from_entries([
            ("start", ExampleDoc::html("<html>Hello Vue!</html>")),
            ("h", ExampleDoc::html("<html>Vue.h</html>")),
        ])
    }

    #[test]
    fn gets_registered_document_verbatim() {
        let registry = sample();

        let doc = registry.get("start").unwrap();
        assert_eq!(doc.as_str(), "<html>Hello Vue!</html>");
    }

    #[test]
    fn missing_key_is_not_found() {
        let registry = sample();

        let result = registry.get("missing");

        assert!(matches!(result, Err(RegistryError::NotFound(k)) if k == "missing"));
    }

    #[test]
    fn keys_preserve_insertion_order() {
        let registry = sample();

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["start", "h"]);
    }

    #[test]
    fn keys_iterator_is_restartable() {
        let registry = sample();

        let first: Vec<&str> = registry.keys().collect();
        let second: Vec<&str> = registry.keys().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn every_key_resolves_to_nonempty_document() {
        let registry = sample();

        for key in registry.keys() {
            let doc = registry.get(key).unwrap();
            assert!(!doc.as_str().is_empty());
        }
    }

    #[test]
    fn duplicate_key_shadows_but_keeps_position() {
        let registry = ExampleRegistry::from_entries([
            ("start", ExampleDoc::html("first")),
            ("h", ExampleDoc::html("<html>Vue.h</html>")),
            ("start", ExampleDoc::html("second")),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("start").unwrap().as_str(), "second");

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["start", "h"]);
    }
}

//! Verbatim document storage.

use std::collections::BTreeMap;

use crate::data::Record;

/// Records stored as supplied at indexing time, keyed by document key.
///
/// Re-inserting a key replaces the stored record; the inverted index is not
/// touched, so stale term statistics from the earlier record remain until
/// the caller rebuilds the index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStore {
    documents: BTreeMap<String, Record>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under `key`, replacing any prior record.
    pub fn insert(&mut self, key: impl Into<String>, record: Record) {
        self.documents.insert(key.into(), record);
    }

    /// Look up the record stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.documents.get(key)
    }

    /// Whether a record is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.documents.contains_key(key)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate key/record pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.documents.iter()
    }

    /// Iterate document keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.documents.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = DocumentStore::new();
        assert!(store.is_empty());
        store.insert("doc-1", Record::text("the cat sat"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("doc-1").unwrap().as_text(), Some("the cat sat"));
        assert!(store.get("doc-2").is_none());
    }

    #[test]
    fn test_reinsert_replaces() {
        let mut store = DocumentStore::new();
        store.insert("doc-1", Record::text("first"));
        store.insert("doc-1", Record::text("second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("doc-1").unwrap().as_text(), Some("second"));
    }

    #[test]
    fn test_iteration_follows_key_order() {
        let mut store = DocumentStore::new();
        store.insert("b", Record::text("two"));
        store.insert("a", Record::text("one"));
        let keys: Vec<&String> = store.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}

//! Term entries and the inverted index they live in.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Per-term statistics.
///
/// `document_frequency` counts how many times the term has been merged under
/// a distinct index key within a single pass; it is serialized under the
/// short name `n`. `occurrences` maps each index key to the term's
/// normalized frequency within that key's token group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermEntry {
    #[serde(rename = "n")]
    pub document_frequency: u64,
    pub occurrences: BTreeMap<String, f64>,
}

/// The full term table, ordered so snapshots and fuzzy scans are
/// deterministic.
pub type TermTable = BTreeMap<String, TermEntry>;

/// Split an index key into its document key and optional field name.
///
/// Keys produced by per-field indexing look like `doc-1/title`; whole
/// document keys carry no slash. Only the first slash separates, so field
/// names containing slashes survive intact.
pub fn split_index_key(index_key: &str) -> (&str, Option<&str>) {
    match index_key.split_once('/') {
        Some((document_key, field)) => (document_key, Some(field)),
        None => (index_key, None),
    }
}

/// In-memory inverted index over stemmed terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    terms: TermTable,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing term table, e.g. one loaded from a snapshot.
    pub fn from_table(terms: TermTable) -> Self {
        InvertedIndex { terms }
    }

    /// Merge one token group under `index_key`.
    ///
    /// Each distinct term in the group has its document frequency bumped by
    /// one and its occurrence entry for `index_key` set to
    /// `count / group length`. Re-merging the same key overwrites the
    /// occurrence but still bumps the frequency, so repeated indexing of a
    /// document inflates `document_frequency`; that accumulation is
    /// long-standing observable behavior and snapshots preserve it.
    pub fn merge_token_group(&mut self, index_key: &str, tokens: &[String]) {
        if tokens.is_empty() {
            return;
        }
        let total = tokens.len() as f64;
        let mut counts: AHashMap<&str, u64> = AHashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        for (term, count) in counts {
            let entry = self.terms.entry(term.to_string()).or_default();
            entry.document_frequency += 1;
            entry
                .occurrences
                .insert(index_key.to_string(), count as f64 / total);
        }
    }

    /// Look up the entry for an exact term.
    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.terms.get(term)
    }

    /// Whether the exact term is present.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Iterate terms and their entries in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TermEntry)> {
        self.terms.iter()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Borrow the underlying term table.
    pub fn as_table(&self) -> &TermTable {
        &self.terms
    }

    /// Consume the index, yielding the term table.
    pub fn into_table(self) -> TermTable {
        self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_merge_token_group() {
        let mut index = InvertedIndex::new();
        index.merge_token_group("doc-1", &tokens(&["cat", "sat", "cat", "mat"]));

        assert_eq!(index.len(), 3);
        let cat = index.get("cat").unwrap();
        assert_eq!(cat.document_frequency, 1);
        assert_eq!(cat.occurrences["doc-1"], 0.5);
        let sat = index.get("sat").unwrap();
        assert_eq!(sat.document_frequency, 1);
        assert_eq!(sat.occurrences["doc-1"], 0.25);
    }

    #[test]
    fn test_merge_multiple_keys() {
        let mut index = InvertedIndex::new();
        index.merge_token_group("doc-1", &tokens(&["cat", "sat"]));
        index.merge_token_group("doc-2", &tokens(&["cat"]));

        let cat = index.get("cat").unwrap();
        assert_eq!(cat.document_frequency, 2);
        assert_eq!(cat.occurrences["doc-1"], 0.5);
        assert_eq!(cat.occurrences["doc-2"], 1.0);
    }

    #[test]
    fn test_remerge_accumulates_frequency() {
        let mut index = InvertedIndex::new();
        index.merge_token_group("doc-1", &tokens(&["cat"]));
        index.merge_token_group("doc-1", &tokens(&["cat"]));

        let cat = index.get("cat").unwrap();
        assert_eq!(cat.document_frequency, 2);
        assert_eq!(cat.occurrences.len(), 1);
        assert_eq!(cat.occurrences["doc-1"], 1.0);
    }

    #[test]
    fn test_empty_group_is_ignored() {
        let mut index = InvertedIndex::new();
        index.merge_token_group("doc-1", &[]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_split_index_key() {
        assert_eq!(split_index_key("doc-1"), ("doc-1", None));
        assert_eq!(split_index_key("doc-1/title"), ("doc-1", Some("title")));
        assert_eq!(split_index_key("doc-1/a/b"), ("doc-1", Some("a/b")));
    }

    #[test]
    fn test_term_entry_serde_shape() {
        let mut index = InvertedIndex::new();
        index.merge_token_group("doc-1", &tokens(&["cat", "cat"]));
        let json = serde_json::to_string(index.get("cat").unwrap()).unwrap();
        assert_eq!(json, r#"{"n":1,"occurrences":{"doc-1":1.0}}"#);
    }
}

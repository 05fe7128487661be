//! The engine facade over analysis, indexing, and search.

use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::data::Record;
use crate::error::Result;
use crate::index::posting::{InvertedIndex, TermTable};
use crate::index::writer::{self, IndexOptions};
use crate::search::searcher::{self, SearchOptions, SearchResult};
use crate::store::DocumentStore;

/// Engine-level tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Queries with more whitespace-delimited words than this have stop
    /// words stripped; shorter queries keep every word, since stop words
    /// likely carry meaning in short phrases.
    pub stop_word_query_threshold: usize,
    /// Error budget handed to the fuzzy matcher per candidate offset.
    pub fuzzy_errors: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            stop_word_query_threshold: 2,
            fuzzy_errors: 2,
        }
    }
}

/// An in-memory full-text index over caller-supplied records.
///
/// The engine owns the inverted index and the document store; indexing
/// mutates both, searching reads both. One engine value is one index; there
/// is no internal synchronization, so concurrent mutation needs external
/// locking while read-only search against a quiescent engine is safe.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    terms: InvertedIndex,
    documents: DocumentStore,
}

impl Engine {
    /// Create an empty engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            config,
            ..Self::default()
        }
    }

    /// Reconstruct an engine from an exported term table.
    ///
    /// The document store starts empty, so search results resolve their
    /// `document` to `None` until the caller repopulates matching keys via
    /// [`Engine::put_document`].
    pub fn from_index(terms: TermTable) -> Self {
        Engine {
            config: EngineConfig::default(),
            terms: InvertedIndex::from_table(terms),
            documents: DocumentStore::new(),
        }
    }

    /// Borrow the term table for snapshot serialization.
    pub fn export_index(&self) -> &TermTable {
        self.terms.as_table()
    }

    /// Index records whose document keys live in the configured unique-key
    /// field.
    ///
    /// Every record must be a field record carrying a text value under
    /// `options.unique_key`. Records are processed in order; an error stops
    /// the pass and leaves earlier records indexed, while the offending
    /// record itself has no effect.
    pub fn index(&mut self, records: &[Record], options: &IndexOptions) -> Result<()> {
        if options.selectors_conflict() {
            warn!("both index_on and index_keys are set; index_keys takes precedence");
        }
        let started = Instant::now();
        for record in records {
            let key = writer::resolve_document_key(record, options)?;
            self.index_record(&key, record.clone(), options)?;
        }
        debug!(
            "indexed {} records in {:?}, {} terms total",
            records.len(),
            started.elapsed(),
            self.terms.len()
        );
        Ok(())
    }

    /// Index records under explicit document keys.
    ///
    /// Plain text records are welcome here; the unique-key field is not
    /// consulted and keys are not written back into the records.
    pub fn index_keyed<I, K>(&mut self, entries: I, options: &IndexOptions) -> Result<()>
    where
        I: IntoIterator<Item = (K, Record)>,
        K: Into<String>,
    {
        if options.selectors_conflict() {
            warn!("both index_on and index_keys are set; index_keys takes precedence");
        }
        let started = Instant::now();
        let mut count = 0usize;
        for (key, record) in entries {
            self.index_record(&key.into(), record, options)?;
            count += 1;
        }
        debug!(
            "indexed {} keyed records in {:?}, {} terms total",
            count,
            started.elapsed(),
            self.terms.len()
        );
        Ok(())
    }

    fn index_record(&mut self, key: &str, record: Record, options: &IndexOptions) -> Result<()> {
        // Validation happens before the first merge so a failing record
        // leaves the index untouched.
        let groups = writer::token_groups(key, &record, options)?;
        for (index_key, tokens) in &groups {
            self.terms.merge_token_group(index_key, tokens);
        }
        self.documents.insert(key, record);
        Ok(())
    }

    /// Rank documents against a free-text query.
    ///
    /// Never fails: an empty query returns every stored document unranked,
    /// and a query nothing matches returns the empty vector.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        if query.is_empty() {
            let mut results: Vec<SearchResult> = self
                .documents
                .iter()
                .map(|(key, record)| SearchResult::unranked(key, record))
                .collect();
            if let Some(max) = options.max_results {
                results.truncate(max);
            }
            return results;
        }

        let started = Instant::now();
        let keep_stop_words =
            query.split_whitespace().count() <= self.config.stop_word_query_threshold;
        let query_terms = tokenize(query, keep_stop_words);
        let results = searcher::execute(
            &query_terms,
            &self.terms,
            &self.documents,
            options,
            self.config.fuzzy_errors,
        );
        debug!(
            "query {:?} matched {} documents in {:?}",
            query,
            results.len(),
            started.elapsed()
        );
        results
    }

    /// Rank documents against a query and return just the stored records.
    ///
    /// Results whose documents are absent from the store (an engine built
    /// via [`Engine::from_index`] and not repopulated) are dropped.
    pub fn search_documents(&self, query: &str, options: &SearchOptions) -> Vec<Record> {
        self.search(query, options)
            .into_iter()
            .filter_map(|result| result.document)
            .collect()
    }

    /// Store a record without indexing it, so searches against an imported
    /// term table can resolve their documents.
    pub fn put_document(&mut self, key: impl Into<String>, record: Record) {
        self.documents.insert(key, record);
    }

    /// Look up a stored record.
    pub fn document(&self, key: &str) -> Option<&Record> {
        self.documents.get(key)
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

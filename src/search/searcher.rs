//! Match collection, relevance accumulation, and ranking.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::data::Record;
use crate::index::posting::{InvertedIndex, TermEntry, split_index_key};
use crate::search::fuzzy::find_match;
use crate::store::DocumentStore;

/// Configuration for search operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Per-field relevance multipliers applied to contributions from
    /// field-scoped index keys.
    pub weight: Option<HashMap<String, f64>>,
    /// Upper bound on the number of results returned.
    pub max_results: Option<usize>,
}

impl SearchOptions {
    /// Options with no weighting and no result bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Multiply contributions from `field` by `multiplier`.
    pub fn with_weight(mut self, field: impl Into<String>, multiplier: f64) -> Self {
        self.weight
            .get_or_insert_with(HashMap::new)
            .insert(field.into(), multiplier);
        self
    }
}

/// One ranked document in a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document key.
    pub key: String,
    /// The stored record, when the document store holds one for this key.
    pub document: Option<Record>,
    /// Index terms matched per field, for documents indexed field by field.
    pub found_in: BTreeMap<String, Vec<String>>,
    /// Index terms matched against whole-document index keys.
    pub matched_terms: Vec<String>,
    /// Accumulated relevance before field weighting.
    pub relevance: f64,
    /// Accumulated relevance with field weights applied per contribution.
    pub scaled_relevance: f64,
}

impl SearchResult {
    /// A zero-relevance result carrying just the stored document, used when
    /// an empty query returns the whole store.
    pub(crate) fn unranked(key: &str, document: &Record) -> Self {
        SearchResult {
            key: key.to_string(),
            document: Some(document.clone()),
            found_in: BTreeMap::new(),
            matched_terms: Vec::new(),
            relevance: 0.0,
            scaled_relevance: 0.0,
        }
    }
}

/// An index term hit by a query term, exactly or fuzzily.
struct TermMatch<'a> {
    term: &'a str,
    entry: &'a TermEntry,
    relevance: f64,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Collect every index term the query term hits. A verbatim hit scores 1.0
/// and is reported first; every other index term at least as long as the
/// query term is probed fuzzily and scores by how much of it the query term
/// covers, squared, rounded to three decimals.
fn collect_matches<'a>(
    query_term: &str,
    index: &'a InvertedIndex,
    fuzzy_errors: u32,
) -> Vec<TermMatch<'a>> {
    let mut exact = None;
    let mut fuzzy = Vec::new();
    for (term, entry) in index.iter() {
        if term.as_str() == query_term {
            exact = Some(TermMatch {
                term,
                entry,
                relevance: 1.0,
            });
            continue;
        }
        if term.len() < query_term.len() {
            continue;
        }
        if let Some(offset) = find_match(query_term, term, fuzzy_errors) {
            let coverage = query_term.len() as f64 / (term.len() + offset) as f64;
            fuzzy.push(TermMatch {
                term,
                entry,
                relevance: round3(coverage * coverage),
            });
        }
    }
    exact.into_iter().chain(fuzzy).collect()
}

fn apply_weight(value: f64, field: Option<&str>, options: &SearchOptions) -> f64 {
    match (field, &options.weight) {
        (Some(field), Some(weights)) => match weights.get(field) {
            Some(multiplier) => value * multiplier,
            None => value,
        },
        _ => value,
    }
}

fn note_match(result: &mut SearchResult, field: Option<&str>, term: &str) {
    match field {
        Some(field) => result
            .found_in
            .entry(field.to_string())
            .or_default()
            .push(term.to_string()),
        None => result.matched_terms.push(term.to_string()),
    }
}

/// Rank every document touched by the query terms.
///
/// The first contribution to a document combines the term's stored
/// frequency with the match relevance; later contributions add a dampened
/// share so piling up weak fuzzy hits cannot outrank a strong first hit.
/// Field weights scale each contribution independently.
pub(crate) fn execute(
    query_terms: &[String],
    index: &InvertedIndex,
    documents: &DocumentStore,
    options: &SearchOptions,
    fuzzy_errors: u32,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut recorded: AHashMap<String, usize> = AHashMap::new();

    for query_term in query_terms {
        for TermMatch {
            term,
            entry,
            relevance,
        } in collect_matches(query_term, index, fuzzy_errors)
        {
            for (index_key, frequency) in &entry.occurrences {
                let (document_key, field) = split_index_key(index_key);
                match recorded.get(document_key) {
                    None => {
                        let base = frequency + relevance;
                        let mut result = SearchResult {
                            key: document_key.to_string(),
                            document: documents.get(document_key).cloned(),
                            found_in: BTreeMap::new(),
                            matched_terms: Vec::new(),
                            relevance: base,
                            scaled_relevance: apply_weight(base, field, options),
                        };
                        note_match(&mut result, field, term);
                        recorded.insert(document_key.to_string(), results.len());
                        results.push(result);
                    }
                    Some(&slot) => {
                        let result = &mut results[slot];
                        let fraction = relevance - relevance.floor();
                        let added = if fraction == 0.0 {
                            0.5
                        } else {
                            fraction * fraction
                        };
                        result.relevance += added;
                        result.scaled_relevance += apply_weight(added, field, options);
                        note_match(result, field, term);
                    }
                }
            }
        }
    }

    results.sort_by(|a, b| {
        b.scaled_relevance
            .partial_cmp(&a.scaled_relevance)
            .unwrap_or(Ordering::Equal)
    });
    if let Some(max) = options.max_results {
        results.truncate(max);
    }
    results
}

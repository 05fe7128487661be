//! Indexing options and record-to-token-group extraction.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::data::{FieldValue, Record};
use crate::error::{CallunaError, Result};

/// Which fields feed the whole-document token stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexOn {
    /// Every field contributes, in field order.
    #[default]
    All,
    /// Only the named fields contribute; absent fields are skipped.
    Fields(Vec<String>),
}

/// Configuration for indexing operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Field holding the document key when records arrive without explicit
    /// keys.
    pub unique_key: String,
    /// Whether stop words stay in the token stream.
    pub keep_stop_words: bool,
    /// Fields feeding the whole-document token stream.
    pub index_on: IndexOn,
    /// Fields indexed separately, each under its own `documentKey/fieldName`
    /// index key. Takes precedence over `index_on` when both are customized.
    pub index_keys: Option<Vec<String>>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            unique_key: "key".to_string(),
            keep_stop_words: false,
            index_on: IndexOn::All,
            index_keys: None,
        }
    }
}

impl IndexOptions {
    /// Options with the defaults: key field `"key"`, stop words stripped,
    /// whole-document indexing over every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field holding each record's document key.
    pub fn unique_key(mut self, field: impl Into<String>) -> Self {
        self.unique_key = field.into();
        self
    }

    /// Keep stop words instead of stripping them.
    pub fn keep_stop_words(mut self, keep: bool) -> Self {
        self.keep_stop_words = keep;
        self
    }

    /// Restrict whole-document indexing to the named fields.
    pub fn index_on<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_on = IndexOn::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Index the named fields separately under `documentKey/fieldName` keys.
    pub fn index_keys<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_keys = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Whether both field selectors have been customized. `index_keys` wins
    /// the conflict; callers surface it as a warning rather than an error.
    pub(crate) fn selectors_conflict(&self) -> bool {
        self.index_keys.is_some() && self.index_on != IndexOn::All
    }
}

/// Derive the document key for a field record from the configured
/// unique-key field.
pub(crate) fn resolve_document_key(record: &Record, options: &IndexOptions) -> Result<String> {
    let fields = match record {
        Record::Fields(fields) => fields,
        Record::Text(_) => {
            return Err(CallunaError::missing_document_id(
                "plain text records need explicit keys",
            ));
        }
    };
    match fields.get(&options.unique_key) {
        Some(FieldValue::Text(key)) => Ok(key.clone()),
        _ => Err(CallunaError::missing_document_id(format!(
            "no text value under '{}'",
            options.unique_key
        ))),
    }
}

/// Turn one record into its token groups, each a `(index key, tokens)` pair
/// ready to merge into the inverted index.
///
/// All validation happens here; when this returns `Ok` the caller can merge
/// every group without the record failing halfway through.
pub(crate) fn token_groups(
    document_key: &str,
    record: &Record,
    options: &IndexOptions,
) -> Result<Vec<(String, Vec<String>)>> {
    if let Some(index_keys) = &options.index_keys {
        let mut groups = Vec::with_capacity(index_keys.len());
        for field in index_keys {
            let value = record.get(field).ok_or_else(|| {
                CallunaError::unsupported_field(format!("'{field}' is missing from the record"))
            })?;
            let tokens = tokenize(&value.flatten(), options.keep_stop_words);
            groups.push((format!("{document_key}/{field}"), tokens));
        }
        return Ok(groups);
    }

    let text = match record {
        Record::Text(text) => text.clone(),
        Record::Fields(fields) => match &options.index_on {
            IndexOn::All => fields
                .values()
                .map(FieldValue::flatten)
                .collect::<Vec<_>>()
                .join(" "),
            IndexOn::Fields(named) => named
                .iter()
                .filter_map(|name| fields.get(name))
                .map(FieldValue::flatten)
                .collect::<Vec<_>>()
                .join(" "),
        },
    };
    let tokens = tokenize(&text, options.keep_stop_words);
    Ok(vec![(document_key.to_string(), tokens)])
}

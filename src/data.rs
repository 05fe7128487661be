//! Core data model for calluna.
//!
//! A [`Record`] is what callers hand to the engine: either a plain string
//! body or a mapping of field names to [`FieldValue`]s. Records are stored
//! verbatim for retrieval; normalization only happens to the text extracted
//! from them at indexing time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field value inside a fielded record.
///
/// Values are either plain text or a nested mapping; nested mappings are
/// flattened to text when the field is indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// A nested mapping of names to further values.
    Nested(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Get the value as a string slice, if it is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Nested(_) => None,
        }
    }

    /// Render the value as indexable text.
    ///
    /// Nested mappings are concatenated depth-first, values joined by single
    /// spaces.
    pub fn flatten(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Nested(map) => {
                let parts: Vec<String> = map.values().map(FieldValue::flatten).collect();
                parts.join(" ")
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(value: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Nested(value)
    }
}

/// A caller-supplied document.
///
/// Either a plain string body indexed as a whole, or a mapping of field
/// names to values indexed according to the active [`IndexOptions`].
///
/// [`IndexOptions`]: crate::index::IndexOptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// A plain string body.
    Text(String),
    /// A mapping of field names to values.
    Fields(BTreeMap<String, FieldValue>),
}

impl Record {
    /// Create a plain-text record.
    pub fn text<S: Into<String>>(value: S) -> Self {
        Record::Text(value.into())
    }

    /// Create a fielded record from (name, value) pairs.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Record::Fields(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Get the record body, if it is a plain-text record.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Record::Text(text) => Some(text),
            Record::Fields(_) => None,
        }
    }

    /// Get the field mapping, if it is a fielded record.
    pub fn fields(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            Record::Text(_) => None,
            Record::Fields(fields) => Some(fields),
        }
    }

    /// Look up a field value by name.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields().and_then(|fields| fields.get(field))
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::Text(value.to_string())
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Record::Text(value)
    }
}

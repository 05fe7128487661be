//! Error types used across calluna.

use thiserror::Error;

/// Unified error type for all calluna operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallunaError {
    /// A record offered for indexing carries no usable string key.
    #[error("Missing document id: {0}")]
    MissingDocumentId(String),

    /// A field selected for indexing is absent or cannot be rendered as text.
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// A record that is neither plain text nor a field mapping. The typed
    /// record union leaves this unreachable from the built-in ingestion
    /// paths.
    #[error("Invalid document shape: {0}")]
    InvalidDocumentShape(String),
}

impl CallunaError {
    /// Create a missing-document-id error.
    pub fn missing_document_id<S: Into<String>>(message: S) -> Self {
        CallunaError::MissingDocumentId(message.into())
    }

    /// Create an unsupported-field error.
    pub fn unsupported_field<S: Into<String>>(message: S) -> Self {
        CallunaError::UnsupportedField(message.into())
    }

    /// Create an invalid-document-shape error.
    pub fn invalid_document<S: Into<String>>(message: S) -> Self {
        CallunaError::InvalidDocumentShape(message.into())
    }
}

/// Result type alias for calluna operations.
pub type Result<T> = std::result::Result<T, CallunaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CallunaError::missing_document_id("record 3 has no 'key' field");
        assert_eq!(
            err.to_string(),
            "Missing document id: record 3 has no 'key' field"
        );

        let err = CallunaError::unsupported_field("field 'title' is absent");
        assert!(err.to_string().starts_with("Unsupported field:"));
    }

    #[test]
    fn test_constructors_map_to_variants() {
        assert!(matches!(
            CallunaError::invalid_document("x"),
            CallunaError::InvalidDocumentShape(_)
        ));
    }
}

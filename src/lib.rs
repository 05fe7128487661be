//! # Calluna
//!
//! A tiny, embeddable full-text indexing and retrieval engine.
//!
//! ## Features
//!
//! - Pure Rust, fully in-memory, no I/O surface
//! - Porter-style suffix-stripping stemmer and stop-word filtering
//! - Fuzzy term matching tolerant of typos and adjacent transpositions
//! - Field-weighted relevance ranking
//! - Whole-document or per-field indexing
//! - Serializable index snapshots

// Core modules
pub mod analysis;
pub mod data;
pub mod engine;
pub mod error;
pub mod index;
pub mod search;
pub mod store;
mod util;

// Re-exports for the public API
pub use analysis::{stem, tokenize};
pub use data::{FieldValue, Record};
pub use engine::{Engine, EngineConfig};
pub use error::{CallunaError, Result};
pub use index::{IndexOn, IndexOptions, InvertedIndex, TermEntry, TermTable};
pub use search::{SearchOptions, SearchResult, find_match};
pub use store::DocumentStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

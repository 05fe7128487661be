//! Query evaluation.
//!
//! [`fuzzy`] provides the approximate substring primitive used to match
//! query terms against index terms they do not equal verbatim. [`searcher`]
//! collects exact and fuzzy term matches, accumulates per-document
//! relevance, and ranks the results.

pub mod fuzzy;
pub mod searcher;

pub use fuzzy::find_match;
pub use searcher::{SearchOptions, SearchResult};

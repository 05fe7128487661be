//! Inverted index construction.
//!
//! [`posting`] holds the term table itself: one [`TermEntry`] per stemmed
//! term, keyed by index key. [`writer`] turns records into token groups and
//! merges them into the table according to [`IndexOptions`].

pub mod posting;
pub mod writer;

pub use posting::{InvertedIndex, TermEntry, TermTable, split_index_key};
pub use writer::{IndexOn, IndexOptions};

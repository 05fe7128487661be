//! Text analysis: tokenization, stop-word filtering, and stemming.
//!
//! Analysis is the pipeline every piece of text passes through before it
//! reaches the index or the searcher:
//!
//! 1. [`tokenizer`] lowercases the text, strips non-word characters, and
//!    splits it into raw words.
//! 2. [`stop_words`] holds the fixed English stop-word list; filtering is
//!    applied to raw words, never to stems.
//! 3. [`stemmer`] reduces each surviving word to its stem.

pub mod stemmer;
pub mod stop_words;
pub mod tokenizer;

pub use stemmer::stem;
pub use stop_words::{STOP_WORDS, is_stop_word};
pub use tokenizer::tokenize;

//! Text-to-term tokenization.

use lazy_static::lazy_static;
use regex::Regex;

use super::stemmer::stem;
use super::stop_words::is_stop_word;

lazy_static! {
    // Word characters are ASCII letters, digits, and underscore; everything
    // else separates tokens.
    static ref NON_WORD: Regex = Regex::new("[^a-z0-9_]+").unwrap();
}

/// Split `text` into stemmed terms.
///
/// The text is lowercased, every non-word character becomes a separator,
/// and each surviving word is stemmed. When `keep_stop_words` is false,
/// stop words are dropped before stemming; the membership test always runs
/// against the raw word, never the stem. Empty input yields no terms, and
/// no term is ever empty.
///
/// ```
/// use calluna::analysis::tokenize;
///
/// let terms = tokenize("hopefully this works!", true);
/// assert_eq!(terms, vec!["hopefulli", "thi", "work"]);
/// ```
pub fn tokenize(text: &str, keep_stop_words: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    spaced
        .split_whitespace()
        .filter(|word| keep_stop_words || !is_stop_word(word))
        .map(stem)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sentences() {
        assert_eq!(
            tokenize("there are plenty of words to go around", true),
            vec!["there", "ar", "plenti", "of", "word", "to", "go", "around"]
        );
        assert_eq!(
            tokenize("hopefully this works!", true),
            vec!["hopefulli", "thi", "work"]
        );
    }

    #[test]
    fn test_stop_word_filtering() {
        // "this" is filtered on the raw word; its stem "thi" never appears.
        assert_eq!(
            tokenize("hopefully this works!", false),
            vec!["hopefulli", "work"]
        );
        assert_eq!(tokenize("the and are", false), Vec::<String>::new());
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("Cats,  dogs;\tbirds!!", true),
            vec!["cat", "dog", "bird"]
        );
        assert_eq!(tokenize("", true), Vec::<String>::new());
        assert_eq!(tokenize("   \t\n ", true), Vec::<String>::new());
        assert_eq!(tokenize("!!!", true), Vec::<String>::new());
    }

    #[test]
    fn test_word_characters() {
        // Underscores and digits are word characters.
        assert_eq!(tokenize("foo_bar v2", true), vec!["foo_bar", "v2"]);
        // Anything else, including non-ASCII, separates.
        assert_eq!(tokenize("naïve café", true), vec!["na", "ve", "caf"]);
    }
}

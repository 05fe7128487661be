//! Suffix-stripping stemmer.
//!
//! A Porter-flavored algorithm: words are classified into alternating
//! consonant/vowel sequences, and a fixed cascade of suffix rules strips or
//! rewrites endings gated on the measure (the number of vowel-to-consonant
//! alternations) of what would remain. This is the variant the engine has
//! always used, not canonical Porter; the two disagree on a handful of
//! words.
//!
//! [`stem`] is pure and deterministic: same word in, same stem out.

use lazy_static::lazy_static;
use regex::Regex;

use crate::util::{capitalize_first, lowercase_first};

// Character classes shared by every measure test. `y` may open either kind
// of sequence but never continues one; an uppercased `Y` (the internal mark
// for a leading `y`) is always a consonant.
const CONSONANT_SEQ: &str = "[^aeiou][^aeiouy]*";
const VOWEL_SEQ: &str = "[aeiouy][aeiou]*";

lazy_static! {
    /// measure > 0: at least one vowel-consonant alternation.
    static ref MEASURE_GT_0: Regex =
        Regex::new(&format!("^({CONSONANT_SEQ})?{VOWEL_SEQ}{CONSONANT_SEQ}")).unwrap();
    /// measure == 1: exactly one alternation, optionally trailed by vowels.
    static ref MEASURE_EQ_1: Regex = Regex::new(&format!(
        "^({CONSONANT_SEQ})?{VOWEL_SEQ}{CONSONANT_SEQ}({VOWEL_SEQ})?$"
    ))
    .unwrap();
    /// measure > 1: two or more alternations.
    static ref MEASURE_GT_1: Regex = Regex::new(&format!(
        "^({CONSONANT_SEQ})?{VOWEL_SEQ}{CONSONANT_SEQ}{VOWEL_SEQ}{CONSONANT_SEQ}"
    ))
    .unwrap();
    /// The stem contains at least one vowel.
    static ref HAS_VOWEL: Regex =
        Regex::new(&format!("^({CONSONANT_SEQ})?[aeiouy]")).unwrap();
    /// The stem is exactly consonant(s)-vowel-consonant with the final
    /// consonant not `w`, `x`, or `y`.
    static ref ENDS_CVC: Regex =
        Regex::new(&format!("^{CONSONANT_SEQ}[aeiouy][^aeiouwxy]$")).unwrap();
}

/// Long suffix rewrites; first match in table order wins, and containing
/// suffixes are listed before contained ones.
static LONG_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Short suffix rewrites, same matching rules as [`LONG_SUFFIXES`].
static SHORT_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Residual suffixes stripped outright when the remaining stem has
/// measure > 1.
static RESIDUAL_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

/// Stem a single word.
///
/// The word is lowercased first. Words shorter than three characters come
/// back unchanged.
///
/// ```
/// use calluna::analysis::stem;
///
/// assert_eq!(stem("plenty"), "plenti");
/// assert_eq!(stem("hopefully"), "hopefulli");
/// assert_eq!(stem("as"), "as");
/// ```
pub fn stem(word: &str) -> String {
    let mut w = word.to_lowercase();
    if w.chars().count() < 3 {
        return w;
    }

    // A leading `y` is treated as a consonant for the whole run: marked by
    // uppercasing (keeping it out of the vowel classes) and restored at the
    // end.
    let marked_y = w.starts_with('y');
    if marked_y {
        w = capitalize_first(&w);
    }

    w = strip_plurals(w);
    w = strip_tense(w);
    w = rewrite_final_y(w);
    w = apply_suffix_table(w, LONG_SUFFIXES);
    w = apply_suffix_table(w, SHORT_SUFFIXES);
    w = strip_residual_suffix(w);
    w = strip_final_e(w);
    w = collapse_final_ll(w);

    if marked_y {
        w = lowercase_first(&w);
    }
    w
}

/// `sses`/`ies` drop the `es`; otherwise a final `s` preceded by a non-`s`
/// character is stripped. Each rule needs a non-empty remainder.
fn strip_plurals(word: String) -> String {
    if word.ends_with("es") {
        let stem = &word[..word.len() - 2];
        if (stem.len() > 2 && stem.ends_with("ss")) || (stem.len() > 1 && stem.ends_with('i')) {
            return stem.to_string();
        }
    }
    if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") {
        let mut w = word;
        w.pop();
        return w;
    }
    word
}

/// `eed` loses its `d` when the prefix has measure > 0 (and consumes the
/// word either way); otherwise `ed`/`ing` are stripped when the remaining
/// stem has a vowel, followed by the end-of-stem adjustments.
fn strip_tense(word: String) -> String {
    if word.len() > 3 && word.ends_with("eed") {
        if MEASURE_GT_0.is_match(&word[..word.len() - 3]) {
            let mut w = word;
            w.pop();
            return w;
        }
        return word;
    }

    let stem_len = if word.len() > 2 && word.ends_with("ed") {
        word.len() - 2
    } else if word.len() > 3 && word.ends_with("ing") {
        word.len() - 3
    } else {
        return word;
    };
    if !HAS_VOWEL.is_match(&word[..stem_len]) {
        return word;
    }

    let mut w = word;
    w.truncate(stem_len);
    if w.ends_with("at") || w.ends_with("bl") || w.ends_with("iz") {
        w.push('e');
    } else if ends_with_doubled_consonant(&w) {
        w.pop();
    } else if ENDS_CVC.is_match(&w) {
        w.push('e');
    }
    w
}

/// A trailing `y` becomes `i` when the stem contains a vowel.
fn rewrite_final_y(word: String) -> String {
    if word.len() > 1 && word.ends_with('y') && HAS_VOWEL.is_match(&word[..word.len() - 1]) {
        let mut w = word;
        w.pop();
        w.push('i');
        return w;
    }
    word
}

/// Rewrite the first table suffix found at the end of the word, gated on the
/// pre-suffix stem having measure > 0. A matched suffix consumes the word
/// whether or not the gate passes.
fn apply_suffix_table(word: String, table: &[(&str, &str)]) -> String {
    for (suffix, replacement) in table {
        if word.len() > suffix.len() && word.ends_with(suffix) {
            let stem = &word[..word.len() - suffix.len()];
            if MEASURE_GT_0.is_match(stem) {
                let mut w = String::with_capacity(stem.len() + replacement.len());
                w.push_str(stem);
                w.push_str(replacement);
                return w;
            }
            return word;
        }
    }
    word
}

/// Strip one residual suffix when the remaining stem has measure > 1; for
/// words ending in `sion`/`tion` only the `ion` goes, under the same gate.
fn strip_residual_suffix(word: String) -> String {
    for suffix in RESIDUAL_SUFFIXES {
        if word.len() > suffix.len() && word.ends_with(suffix) {
            let stem = &word[..word.len() - suffix.len()];
            if MEASURE_GT_1.is_match(stem) {
                return stem.to_string();
            }
            return word;
        }
    }
    if word.ends_with("ion") {
        let stem = &word[..word.len() - 3];
        if stem.len() > 1 && (stem.ends_with('s') || stem.ends_with('t')) && MEASURE_GT_1.is_match(stem) {
            return stem.to_string();
        }
    }
    word
}

/// A trailing `e` is dropped when the stem has measure > 1, or measure == 1
/// without a consonant-vowel-consonant ending.
fn strip_final_e(word: String) -> String {
    if word.len() > 1 && word.ends_with('e') {
        let stem = &word[..word.len() - 1];
        if MEASURE_GT_1.is_match(stem) || (MEASURE_EQ_1.is_match(stem) && !ENDS_CVC.is_match(stem))
        {
            let mut w = word;
            w.pop();
            return w;
        }
    }
    word
}

/// `ll` collapses to `l` when the whole word has measure > 1.
fn collapse_final_ll(word: String) -> String {
    if word.ends_with("ll") && MEASURE_GT_1.is_match(&word) {
        let mut w = word;
        w.pop();
        return w;
    }
    word
}

/// The word ends in the same consonant twice, excluding `l`, `s`, and `z`.
fn ends_with_doubled_consonant(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(prev)) => last == prev && !"aeiouylsz".contains(last),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_floor() {
        assert_eq!(stem("as"), "as");
        assert_eq!(stem("go"), "go");
        assert_eq!(stem("i"), "i");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn test_lowercases_input() {
        assert_eq!(stem("CATS"), "cat");
        assert_eq!(stem("Plenty"), "plenti");
    }

    #[test]
    fn test_plurals() {
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("caress"), "caress");
        assert_eq!(stem("words"), "word");
        assert_eq!(stem("this"), "thi");
    }

    #[test]
    fn test_eed() {
        // The eed rule yields "agree"; the final-e rule then trims it.
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("feed"), "feed");
    }

    #[test]
    fn test_ed_ing() {
        assert_eq!(stem("plastered"), "plaster");
        assert_eq!(stem("motoring"), "motor");
        // No vowel in the stem: the suffix stays.
        assert_eq!(stem("sing"), "sing");
        // Post-adjustments: doubled consonant, cvc, at/bl/iz.
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("falling"), "fall");
        assert_eq!(stem("filing"), "file");
        assert_eq!(stem("enabling"), "enabl");
    }

    #[test]
    fn test_final_y() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("plenty"), "plenti");
        assert_eq!(stem("sky"), "sky");
        assert_eq!(stem("yearly"), "yearli");
    }

    #[test]
    fn test_long_suffixes() {
        // ational -> ate, then the final-e rule trims the result.
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("organization"), "organ");
        assert_eq!(stem("hopefully"), "hopefulli");
    }

    #[test]
    fn test_residual_suffixes() {
        assert_eq!(stem("conditional"), "condit");
        assert_eq!(stem("replacement"), "replac");
        assert_eq!(stem("vietnamization"), "vietnam");
    }

    #[test]
    fn test_final_e_and_ll() {
        assert_eq!(stem("there"), "there");
        assert_eq!(stem("are"), "ar");
        assert_eq!(stem("controlling"), "control");
        assert_eq!(stem("roll"), "roll");
    }

    #[test]
    fn test_reference_words() {
        // The vectors the index format depends on.
        assert_eq!(stem("there"), "there");
        assert_eq!(stem("are"), "ar");
        assert_eq!(stem("plenty"), "plenti");
        assert_eq!(stem("of"), "of");
        assert_eq!(stem("words"), "word");
        assert_eq!(stem("to"), "to");
        assert_eq!(stem("go"), "go");
        assert_eq!(stem("around"), "around");
        assert_eq!(stem("hopefully"), "hopefulli");
        assert_eq!(stem("this"), "thi");
        assert_eq!(stem("works"), "work");
    }
}

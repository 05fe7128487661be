//! Small string helpers shared across calluna modules.

/// Upper-case the first character of a word, leaving the rest untouched.
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character of a word, leaving the rest untouched.
pub(crate) fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("yellow"), "Yellow");
        assert_eq!(capitalize_first("Y"), "Y");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("Yellow"), "yellow");
        assert_eq!(lowercase_first("y"), "y");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(lowercase_first(&capitalize_first("young")), "young");
    }
}

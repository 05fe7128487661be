//! Approximate substring matching.

/// Find an approximate occurrence of the shorter of `a` and `b` inside the
/// longer, returning the byte offset where the leftmost match starts.
///
/// Every candidate offset is tried independently with a fresh error budget
/// of `errors_allowed` single-character substitutions. Within an attempt,
/// two mismatches at adjacent positions abort it unless they form an
/// adjacent transposition (the two characters swapped between the strings);
/// transpositions still spend budget but are exempt from the adjacency
/// rule. Offsets without enough characters left for the shorter string are
/// never candidates.
///
/// Returns `None` when either string is empty or no offset fits the budget.
///
/// ```
/// use calluna::search::fuzzy::find_match;
///
/// assert_eq!(find_match("kitten", "sitting", 2), Some(0));
/// assert_eq!(find_match("cat", "dog cat", 2), Some(4));
/// assert_eq!(find_match("abc", "xyz", 2), None);
/// ```
pub fn find_match(a: &str, b: &str, errors_allowed: u32) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (long, short) = if a_chars.len() > b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if short.is_empty() {
        return None;
    }

    'offsets: for start in 0..=(long.len() - short.len()) {
        let mut errors = 0u32;
        let mut last_error: Option<usize> = None;
        for (j, &wanted) in short.iter().enumerate() {
            let i = start + j;
            if long[i] == wanted {
                continue;
            }
            errors += 1;
            if errors > errors_allowed {
                continue 'offsets;
            }
            let transposed = j > 0 && wanted == long[i - 1] && short[j - 1] == long[i];
            if let Some(previous) = last_error {
                if previous + 1 == i && !transposed {
                    continue 'offsets;
                }
            }
            last_error = Some(i);
        }
        return Some(start);
    }
    None
}

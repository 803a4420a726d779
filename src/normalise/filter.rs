//! Character and numeric filtering.

/// Strips a token down to the accepted character set.
///
/// Only ASCII alphanumerics survive, and letters are lowercased so lexical variants of a word
/// collapse to one key. Punctuation, symbols and non-ASCII characters are removed. The result
/// may be the empty string.
///
/// Digits are kept at this stage so that `is_numeric` can still see them.
pub fn strip_symbols(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns true for tokens that are purely numeric.
///
/// A token that is nothing but digits is noise for a word count and is discarded entirely.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

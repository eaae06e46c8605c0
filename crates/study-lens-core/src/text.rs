//! Text processing utilities.
//!
//! Provides the period-based sentence segmentation, whitespace word
//! splitting, and letter-run tokenization shared by the scorers.
//!
//! Segmentation is deliberately naive: a sentence is whatever lies between
//! two `.` characters. Abbreviations, decimals, `!` and `?` are not treated
//! specially, which keeps every score reproducible from the raw text alone.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of lowercase Cyrillic (`а`–`я`) or Latin letters bounded by word breaks.
///
/// `ё` is outside the `а-я` range and therefore splits tokens. Combining
/// marks (U+0306, U+0307) count as word characters for `\b`, so a word
/// holding one, such as decomposed `й` or lowercased `İ`, yields no token.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[а-яa-z]+\b").expect("valid regex"));

/// Split text on every `.`, keeping empty and whitespace-only fragments.
///
/// Always yields at least one fragment (the empty string splits to `[""]`).
pub fn split_fragments(text: &str) -> Vec<&str> {
    text.split('.').collect()
}

/// Split text into sentences: `.`-separated fragments, trimmed, with
/// whitespace-only fragments removed.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into words on Unicode whitespace, punctuation included.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lowercase the text and extract letter-run tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Length of a string in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

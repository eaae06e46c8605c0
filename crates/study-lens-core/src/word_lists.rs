//! Curated word lists for educational text analysis.
//!
//! Stop words for keyword extraction, engagement markers, example triggers,
//! and advanced-level markers. All matching is against lowercased text.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words excluded from keyword extraction.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "это", "как", "что", "для", "или", "который", "the", "is", "and", "or",
    ]
    .into_iter()
    .collect()
});

/// Words that make a text feel inviting. Each contributes once, as a substring.
///
/// `как` matches inside many longer words (`также`, `какой`), which is accepted.
pub const ENGAGING_WORDS: &[&str] = &[
    "интересно",
    "важно",
    "удивительно",
    "представьте",
    "давайте",
    "почему",
    "как",
];

/// Substrings signalling that the text offers worked examples.
pub const EXAMPLE_TRIGGERS: &[&str] = &["например", "пример"];

/// Substrings signalling material above the introductory level.
pub const ADVANCED_MARKERS: &[&str] = &[
    "продвинутый",
    "сложный",
    "advanced",
    "комплексный",
    "интегрированный",
];

/// Returns `true` if `word` is excluded from keyword extraction.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_cover_both_scripts() {
        assert!(is_stop_word("который"));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("функция"));
    }

    #[test]
    fn example_triggers_overlap() {
        // "например" already contains "пример"; both are listed and counted once.
        assert!(EXAMPLE_TRIGGERS[0].contains(EXAMPLE_TRIGGERS[1]));
    }
}

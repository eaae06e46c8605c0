//! Frequency-based keyword extraction.

use crate::ranking::ScoreBoard;
use crate::text;
use crate::word_lists::is_stop_word;

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens shorter than this many characters are ignored.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Extract up to ten keywords from `text`.
///
/// Most frequent first; equal counts keep first-seen order.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_keywords(text: &str) -> Vec<String> {
    keywords_from_tokens(&text::tokenize(text))
}

/// Extract keywords from tokens already produced by [`text::tokenize`].
pub fn keywords_from_tokens(tokens: &[String]) -> Vec<String> {
    let mut board: ScoreBoard<&str> = ScoreBoard::new();
    for token in tokens {
        if text::char_len(token) >= MIN_KEYWORD_CHARS && !is_stop_word(token) {
            board.add(token.as_str(), 1);
        }
    }
    let keywords: Vec<String> = board
        .top(MAX_KEYWORDS)
        .into_iter()
        .map(str::to_string)
        .collect();
    tracing::debug!(count = keywords.len(), "keywords extracted");
    keywords
}

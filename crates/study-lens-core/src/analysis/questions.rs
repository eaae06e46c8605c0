//! Self-check question extraction.

use std::sync::LazyLock;

use regex::Regex;

/// A capitalised run without sentence punctuation, ending in `?`.
static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[А-ЯA-Z][^.!?]*\?").expect("valid regex"));

/// Maximum number of questions returned.
pub const MAX_QUESTIONS: usize = 5;

/// Pull the first five questions out of `text` for self-testing.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_questions(text: &str) -> Vec<String> {
    QUESTION_RE
        .find_iter(text)
        .take(MAX_QUESTIONS)
        .map(|m| m.as_str().to_string())
        .collect()
}

//! Readability scoring with a simplified Flesch Reading Ease formula.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (avg_word_len / 5)`
//!
//! Syllable counting is replaced by average word length divided by 5, which
//! keeps the score language-agnostic. Higher = easier. The result is clamped
//! to 0–100 and rounded to one decimal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Score reported when the text has no sentences or no words.
pub const NEUTRAL_READABILITY: f64 = 50.0;

/// Scores at or above this are interpreted as easy.
pub const EASY_THRESHOLD: f64 = 70.0;

/// Scores at or above this (and below [`EASY_THRESHOLD`]) are medium.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Reading-ease score, 0–100, one decimal.
    pub score: f64,
    /// Number of non-blank `.`-separated sentences.
    pub sentences: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Words per sentence (0 when degenerate).
    pub avg_sentence_length: f64,
    /// Characters per word, punctuation included (0 when degenerate).
    pub avg_word_length: f64,
    /// Human-facing interpretation of the score.
    pub interpretation: DifficultyInterpretation,
}

/// Coarse difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    /// Score ≥ 70.
    Easy,
    /// Score in 50–70.
    Medium,
    /// Score < 50.
    Hard,
}

/// Level, description, and study recommendation for a readability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DifficultyInterpretation {
    /// Machine-readable bucket.
    pub difficulty: DifficultyLevel,
    /// Display label.
    pub level: String,
    /// What the score means for the reader.
    pub description: String,
    /// How to study a text of this difficulty.
    pub recommendation: String,
}

/// Compute the readability score of `text`.
///
/// Returns [`NEUTRAL_READABILITY`] for text without sentences or words.
pub fn calculate_readability(text: &str) -> f64 {
    readability_report(text).score
}

/// Compute the readability score together with the statistics behind it.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn readability_report(text: &str) -> ReadabilityReport {
    let sentences = text::split_sentences(text).len();
    let words = text::split_words(text);

    if sentences == 0 || words.is_empty() {
        tracing::debug!("no sentences or words, using neutral score");
        return ReadabilityReport {
            score: NEUTRAL_READABILITY,
            sentences,
            words: words.len(),
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            interpretation: interpret_readability(NEUTRAL_READABILITY),
        };
    }

    let word_count = words.len() as f64;
    let total_chars: usize = words.iter().map(|w| text::char_len(w)).sum();
    let avg_sentence_length = word_count / sentences as f64;
    let avg_word_length = total_chars as f64 / word_count;

    let raw = reading_ease(avg_sentence_length, avg_word_length);
    let score = round1(raw.clamp(0.0, 100.0));
    tracing::debug!(raw, score, "readability computed");

    ReadabilityReport {
        score,
        sentences,
        words: words.len(),
        avg_sentence_length,
        avg_word_length,
        interpretation: interpret_readability(score),
    }
}

/// Map a readability score to a difficulty interpretation.
pub fn interpret_readability(score: f64) -> DifficultyInterpretation {
    let (difficulty, level, description, recommendation) = if score >= EASY_THRESHOLD {
        (
            DifficultyLevel::Easy,
            "Лёгкий",
            "Текст легко читается и понимается",
            "Подходит для самостоятельного изучения",
        )
    } else if score >= MEDIUM_THRESHOLD {
        (
            DifficultyLevel::Medium,
            "Средний",
            "Требует внимания и концентрации",
            "Делайте заметки по ходу чтения",
        )
    } else {
        (
            DifficultyLevel::Hard,
            "Сложный",
            "Сложный текст, требует глубокого изучения",
            "Читайте по частям, используйте дополнительные источники",
        )
    };

    DifficultyInterpretation {
        difficulty,
        level: level.to_string(),
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// Unfused, evaluated left to right, so scores match other implementations
/// of the same formula bit for bit.
#[allow(clippy::suboptimal_flops)]
fn reading_ease(avg_sentence_length: f64, avg_word_length: f64) -> f64 {
    206.835 - 1.015 * avg_sentence_length - 84.6 * (avg_word_length / 5.0)
}

/// Round to one decimal from the exact binary value.
///
/// `(v * 10.0).round()` rounds the already-inexact product and lands on the
/// wrong side of ties like 26.25 and near-ties like 96.85; decimal
/// formatting does not.
fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}

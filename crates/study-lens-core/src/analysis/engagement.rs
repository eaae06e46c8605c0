//! Engagement scoring: an additive heuristic over interactive markers.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;
use crate::word_lists::{ENGAGING_WORDS, EXAMPLE_TRIGGERS};

use super::reports::EngagementReport;

/// Bullet lines for engagement: `-`, `*`, or `•`.
static ENGAGEMENT_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*[-*•]\s").expect("valid regex"));

/// Starting score before any marker is applied.
pub const BASE_SCORE: i32 = 50;

/// Mean words per `.`-fragment above which the long-sentence penalty applies.
pub const LONG_SENTENCE_WORDS: f64 = 25.0;

const ENGAGING_WORD_POINTS: i32 = 2;
const EXAMPLE_POINTS: i32 = 10;
const QUESTION_POINTS: i32 = 3;
const BULLET_POINTS: i32 = 2;
const LONG_SENTENCE_PENALTY: i32 = 10;

/// Compute the engagement score of `text`, 0–100.
pub fn calculate_engagement_score(text: &str) -> i32 {
    engagement_report(text).score
}

/// Compute the engagement score with each contributing signal.
///
/// Starts at 50 and applies:
/// - +2 per distinct engaging word present
/// - +10 if an example trigger is present
/// - +3 per `?`
/// - +2 per bullet line (`-`, `*`, `•`)
/// - −10 if mean words per `.`-fragment exceeds 25 (blank fragments included)
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn engagement_report(text: &str) -> EngagementReport {
    let lowered = text.to_lowercase();

    let engaging_words: Vec<String> = ENGAGING_WORDS
        .iter()
        .filter(|word| lowered.contains(**word))
        .map(|word| (*word).to_string())
        .collect();
    let has_examples = EXAMPLE_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger));
    let question_marks = text.matches('?').count();
    let bullet_lines = ENGAGEMENT_BULLET_RE.find_iter(text).count();

    let fragments = text::split_fragments(text);
    let fragment_words: usize = fragments
        .iter()
        .map(|f| text::split_words(f).len())
        .sum();
    let avg_fragment_words = fragment_words as f64 / fragments.len().max(1) as f64;
    let long_sentence_penalty = avg_fragment_words > LONG_SENTENCE_WORDS;

    let mut score = BASE_SCORE;
    score += ENGAGING_WORD_POINTS * saturating_i32(engaging_words.len());
    if has_examples {
        score += EXAMPLE_POINTS;
    }
    score = score.saturating_add(QUESTION_POINTS.saturating_mul(saturating_i32(question_marks)));
    score = score.saturating_add(BULLET_POINTS.saturating_mul(saturating_i32(bullet_lines)));
    if long_sentence_penalty {
        score -= LONG_SENTENCE_PENALTY;
    }
    let score = score.clamp(0, 100);

    tracing::debug!(
        score,
        engaging = engaging_words.len(),
        question_marks,
        bullet_lines,
        long_sentence_penalty,
        "engagement computed"
    );

    EngagementReport {
        score,
        engaging_words,
        has_examples,
        question_marks,
        bullet_lines,
        avg_fragment_words,
        long_sentence_penalty,
    }
}

fn saturating_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gets_base_score() {
        let report = engagement_report("");
        assert_eq!(report.score, BASE_SCORE);
        assert!(!report.long_sentence_penalty);
    }

    #[test]
    fn four_questions_add_twelve() {
        let text = "Кто? Где? Когда? Зачем?";
        assert_eq!(calculate_engagement_score(text), 62);
    }

    #[test]
    fn engaging_words_count_once_each() {
        // "важно" twice and "давайте" once: 2 distinct words.
        let text = "Это важно. Очень важно. Давайте начнём.";
        let report = engagement_report(text);
        assert_eq!(report.engaging_words, vec!["важно", "давайте"]);
        assert_eq!(report.score, 54);
    }

    #[test]
    fn kak_matches_inside_longer_words() {
        let report = engagement_report("Какой-то текст");
        assert_eq!(report.engaging_words, vec!["как"]);
        assert_eq!(report.score, 52);
    }

    #[test]
    fn examples_add_ten_once() {
        assert_eq!(calculate_engagement_score("Например, пример."), 60);
        assert_eq!(calculate_engagement_score("ПРИМЕР"), 60);
    }

    #[test]
    fn all_bullet_markers_count() {
        let text = "Список\n- один\n* два\n• три";
        let report = engagement_report(text);
        assert_eq!(report.bullet_lines, 3);
        assert_eq!(report.score, 56);
    }

    #[test]
    fn long_fragments_are_penalised() {
        let sentence = "слово ".repeat(30);
        let report = engagement_report(&sentence);
        assert!(report.long_sentence_penalty);
        assert_eq!(report.score, 40);
    }

    #[test]
    fn blank_fragments_dilute_the_average() {
        // 30 words but the trailing "..." adds three blank fragments: 30 / 4 = 7.5
        let text = format!("{}...", "слово ".repeat(30));
        let report = engagement_report(&text);
        assert!(!report.long_sentence_penalty);
        assert_eq!(report.avg_fragment_words, 7.5);
    }

    #[test]
    fn score_is_clamped_to_100() {
        let text = "?".repeat(40);
        assert_eq!(calculate_engagement_score(&text), 100);
    }

    #[test]
    fn score_always_in_bounds() {
        for text in [
            "",
            "a",
            "слово ".repeat(500).as_str(),
            "Почему? ".repeat(100).as_str(),
            "\n- a\n- b\n- c\n- d\n- e\n- f",
        ] {
            let score = calculate_engagement_score(text);
            assert!((0..=100).contains(&score), "{score}");
        }
    }

    #[test]
    fn idempotent() {
        let text = "Представьте себе атом. Почему он стабилен?";
        assert_eq!(engagement_report(text), engagement_report(text));
    }
}

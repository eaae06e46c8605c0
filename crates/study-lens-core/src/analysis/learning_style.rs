//! Learning-style recommendation from keyword presence and layout cues.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{LearningStyle, STYLE_LEXICON};
use crate::ranking::ScoreBoard;

use super::reports::StyleScore;

/// Bullet lines for the visual bonus: `-` or `*` only.
///
/// The engagement scorer's pattern also accepts `•`; this one does not.
static STYLE_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*[-*]\s").expect("valid regex"));

/// Markers of code in the text.
const CODE_MARKERS: &[&str] = &["```", "def "];

/// Points added to `practical` when the text contains code.
pub const CODE_BONUS: usize = 5;

/// Points added to `visual` when the text has enough bullet lines.
pub const LIST_BONUS: usize = 3;

/// Bullet lines required (strictly more than) for [`LIST_BONUS`].
pub const LIST_THRESHOLD: usize = 3;

/// Maximum number of styles recommended.
pub const MAX_STYLES: usize = 2;

/// Score learning styles: one point per distinct keyword present plus the
/// structural bonuses. Styles that scored nothing are omitted.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score_learning_styles(text: &str) -> Vec<StyleScore> {
    tally(text)
        .ranked()
        .into_iter()
        .map(|(style, score)| StyleScore { style, score })
        .collect()
}

/// Recommend up to two learning styles for `text`.
///
/// Falls back to [`LearningStyle::DEFAULT_RANKING`] (three entries) when no
/// keyword or structural signal fires.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn suggest_learning_style(text: &str) -> Vec<LearningStyle> {
    let board = tally(text);
    if board.is_empty() {
        tracing::debug!("no style signal, using default ranking");
        return LearningStyle::DEFAULT_RANKING.to_vec();
    }
    let styles = board.top(MAX_STYLES);
    tracing::debug!(?styles, "learning styles ranked");
    styles
}

/// Number of `-`/`*` bullet lines as counted for the visual bonus.
pub fn count_style_bullets(text: &str) -> usize {
    STYLE_BULLET_RE.find_iter(text).count()
}

fn tally(text: &str) -> ScoreBoard<LearningStyle> {
    let lowered = text.to_lowercase();
    let mut board = ScoreBoard::new();

    for (style, keywords) in STYLE_LEXICON {
        let present = keywords.iter().filter(|kw| lowered.contains(**kw)).count();
        board.add(*style, present);
    }

    if CODE_MARKERS.iter().any(|marker| text.contains(marker)) {
        board.add(LearningStyle::Practical, CODE_BONUS);
    }

    if count_style_bullets(text) > LIST_THRESHOLD {
        board.add(LearningStyle::Visual, LIST_BONUS);
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_BULLETS: &str = "Список:\n- один\n- два\n* три\n  - четыре\n";

    #[test]
    fn zero_signal_returns_default_three() {
        assert_eq!(
            suggest_learning_style("Обычный текст без подсказок."),
            vec![
                LearningStyle::Practical,
                LearningStyle::Visual,
                LearningStyle::Auditory
            ]
        );
        assert_eq!(suggest_learning_style("").len(), 3);
    }

    #[test]
    fn presence_not_frequency() {
        let text = "схема схема схема схема. лекция и диалог.";
        let scores = score_learning_styles(text);
        assert_eq!(scores[0].style, LearningStyle::Auditory);
        assert_eq!(scores[0].score, 2);
        assert_eq!(scores[1].style, LearningStyle::Visual);
        assert_eq!(scores[1].score, 1);
    }

    #[test]
    fn code_fence_adds_practical_bonus() {
        let text = "Посмотрите на схему:\n```\nfn main() {}\n```";
        let scores = score_learning_styles(text);
        assert_eq!(scores[0].style, LearningStyle::Practical);
        assert_eq!(scores[0].score, CODE_BONUS);
    }

    #[test]
    fn def_marker_adds_practical_bonus() {
        let styles = suggest_learning_style("def square(x): return x * x");
        assert_eq!(styles, vec![LearningStyle::Practical]);
    }

    #[test]
    fn returns_at_most_two() {
        let text = "диаграмма, лекция, упражнение, проект";
        let styles = suggest_learning_style(text);
        assert_eq!(
            styles,
            vec![LearningStyle::Practical, LearningStyle::Visual]
        );
    }

    #[test]
    fn more_than_three_bullets_add_visual_bonus() {
        assert_eq!(count_style_bullets(FOUR_BULLETS), 4);
        let scores = score_learning_styles(FOUR_BULLETS);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].style, LearningStyle::Visual);
        assert_eq!(scores[0].score, LIST_BONUS);
    }

    #[test]
    fn three_bullets_are_not_enough() {
        let text = "Список:\n- один\n- два\n- три\n";
        assert_eq!(count_style_bullets(text), 3);
        assert!(score_learning_styles(text).is_empty());
    }

    #[test]
    fn round_bullets_are_ignored_here() {
        // Known quirk: engagement counts "•" bullets, style scoring does not.
        let text = "Список:\n• один\n• два\n• три\n• четыре\n";
        assert_eq!(count_style_bullets(text), 0);
        assert_eq!(
            suggest_learning_style(text),
            LearningStyle::DEFAULT_RANKING.to_vec()
        );
    }

    #[test]
    fn ties_follow_first_scored_order() {
        // Auditory scores 3 from keywords before visual gets its list bonus.
        let text = format!("лекция, диалог, обсуждение{FOUR_BULLETS}");
        assert_eq!(
            suggest_learning_style(&text),
            vec![LearningStyle::Auditory, LearningStyle::Visual]
        );
    }

    #[test]
    fn idempotent() {
        let text = "Эксперимент и таблица.";
        assert_eq!(suggest_learning_style(text), suggest_learning_style(text));
    }
}

//! Subject-area classification by keyword density.

use crate::lexicon::{SUBJECT_LEXICON, Subject};
use crate::ranking::ScoreBoard;

use super::reports::SubjectScore;

/// Score every subject by summed keyword occurrence counts.
///
/// Only subjects with at least one match are returned, highest first,
/// ties in lexicon order.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score_subjects(text: &str) -> Vec<SubjectScore> {
    tally(text)
        .ranked()
        .into_iter()
        .map(|(subject, score)| SubjectScore { subject, score })
        .collect()
}

/// Detect the subject area of `text`.
///
/// Returns [`Subject::General`] when no lexicon keyword occurs.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_subject(text: &str) -> Subject {
    let board = tally(text);
    let subject = board.leader().copied().unwrap_or(Subject::General);
    tracing::debug!(%subject, score = board.get(&subject), "subject detected");
    subject
}

fn tally(text: &str) -> ScoreBoard<Subject> {
    let lowered = text.to_lowercase();
    let mut board = ScoreBoard::new();
    for (subject, keywords) in SUBJECT_LEXICON {
        for keyword in *keywords {
            board.add(*subject, lowered.matches(keyword).count());
        }
    }
    board
}

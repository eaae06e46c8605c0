//! Comprehensive educational text analysis.
//!
//! Each signal is a pure function in its own module. [`analyze_comprehensive`]
//! runs them all over one text and assembles an [`AnalysisReport`]; callers
//! that need a single signal can invoke the feature directly.
//!
//! No function here fails. Empty or degenerate input produces the documented
//! defaults: readability 50, subject `general`, no keywords, the default
//! style ranking, and the base engagement score.

pub mod engagement;
pub mod flashcards;
pub mod keywords;
pub mod learning_style;
pub mod notes;
pub mod prerequisites;
pub mod questions;
pub mod reports;
pub mod subject;

use std::collections::HashSet;

pub use engagement::{calculate_engagement_score, engagement_report};
pub use flashcards::generate_flashcards;
pub use keywords::extract_keywords;
pub use learning_style::{score_learning_styles, suggest_learning_style};
pub use notes::generate_study_notes_template;
pub use prerequisites::identify_prerequisites;
pub use questions::extract_questions;
pub use reports::{
    AnalysisReport, BasicStats, EngagementReport, Flashcard, StudyNotesTemplate, StyleScore,
    SubjectScore,
};
pub use subject::{detect_subject, score_subjects};

use crate::readability;
use crate::text;

/// Run every analysis over `text` and assemble the report.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze_comprehensive(input: &str) -> AnalysisReport {
    let tokens = text::tokenize(input);
    let sentence_count = text::split_sentences(input).len();
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();

    let basic_stats = BasicStats {
        word_count: tokens.len(),
        sentence_count,
        unique_words,
        avg_sentence_length: tokens.len() as f64 / sentence_count.max(1) as f64,
    };

    let keywords = keywords::keywords_from_tokens(&tokens);
    let subject = detect_subject(input);
    let learning_styles = suggest_learning_style(input);
    let readability_score = readability::calculate_readability(input);
    let engagement_score = calculate_engagement_score(input);
    let flashcards = generate_flashcards(input, &keywords);
    let prerequisites = identify_prerequisites(input, subject);
    let notes_template = generate_study_notes_template(&keywords);
    let questions = extract_questions(input);

    tracing::info!(
        %subject,
        readability = readability_score,
        engagement = engagement_score,
        keywords = keywords.len(),
        flashcards = flashcards.len(),
        "analysis complete"
    );

    AnalysisReport {
        basic_stats,
        subject,
        keywords,
        learning_styles,
        readability_score,
        engagement_score,
        prerequisites,
        flashcards,
        notes_template,
        difficulty_interpretation: readability::interpret_readability(readability_score),
        questions,
    }
}

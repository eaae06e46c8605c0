//! Report structs for educational text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! CLI can emit JSON and publish the report schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::{LearningStyle, Subject};
use crate::readability::DifficultyInterpretation;

/// Everything derived from one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Token and sentence counts.
    pub basic_stats: BasicStats,
    /// Detected subject area.
    pub subject: Subject,
    /// Up to ten keywords, most frequent first.
    pub keywords: Vec<String>,
    /// Up to two recommended styles, or the three-style default.
    pub learning_styles: Vec<LearningStyle>,
    /// Reading-ease score, 0–100.
    pub readability_score: f64,
    /// Engagement score, 0–100.
    pub engagement_score: i32,
    /// Knowledge needed beforehand. Never empty.
    pub prerequisites: Vec<String>,
    /// Up to five flashcards.
    pub flashcards: Vec<Flashcard>,
    /// Fill-in-the-blank notes template.
    pub notes_template: StudyNotesTemplate,
    /// Interpretation of the readability score.
    pub difficulty_interpretation: DifficultyInterpretation,
    /// Up to five self-check questions found in the text.
    pub questions: Vec<String>,
}

// -- Basic statistics -------------------------------------------------------

/// Counts over the letter-run tokens and `.`-sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicStats {
    /// Number of letter-run tokens.
    pub word_count: usize,
    /// Number of non-blank `.`-separated sentences.
    pub sentence_count: usize,
    /// Number of distinct tokens.
    pub unique_words: usize,
    /// Tokens per sentence (sentences floored at 1).
    pub avg_sentence_length: f64,
}

// -- Classification -----------------------------------------------------------

/// A subject and its summed keyword occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubjectScore {
    /// The subject.
    pub subject: Subject,
    /// Total keyword occurrences.
    pub score: usize,
}

/// A learning style and its points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StyleScore {
    /// The style.
    pub style: LearningStyle,
    /// Keyword presence plus structural bonuses.
    pub score: usize,
}

// -- Engagement -----------------------------------------------------------------

/// Engagement score with the signals that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngagementReport {
    /// Final score, 0–100.
    pub score: i32,
    /// Engaging words found, in list order.
    pub engaging_words: Vec<String>,
    /// Whether an example trigger was found.
    pub has_examples: bool,
    /// Count of `?` characters.
    pub question_marks: usize,
    /// Count of bullet lines (`-`, `*`, `•`).
    pub bullet_lines: usize,
    /// Mean words per `.`-fragment, blank fragments included.
    pub avg_fragment_words: f64,
    /// Whether the long-sentence penalty applied.
    pub long_sentence_penalty: bool,
}

// -- Study aids -----------------------------------------------------------------

/// A question/answer card built from a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Flashcard {
    /// Prompt side.
    pub front: String,
    /// The first sentence mentioning the keyword.
    pub back: String,
    /// The keyword the card is about.
    pub keyword: String,
}

/// Fixed-shape notes template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudyNotesTemplate {
    /// Heading.
    pub title: String,
    /// Date line with a blank.
    pub date: String,
    /// Five numbered blanks.
    pub key_points: Vec<String>,
    /// Up to eight keywords.
    pub keywords_to_remember: Vec<String>,
    /// Question/answer block, blank lines between pairs.
    pub questions_to_answer: Vec<String>,
    /// Summary prompt with writing space.
    pub summary_space: String,
    /// Reflection prompt with writing space.
    pub reflection: String,
}

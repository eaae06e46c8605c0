//! Prerequisite knowledge lookup.

use crate::lexicon::Subject;
use crate::word_lists::ADVANCED_MARKERS;

/// Baseline prerequisites for a subject. Never empty.
pub const fn base_prerequisites(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::Programming => &[
            "Базовая компьютерная грамотность",
            "Логическое мышление",
            "Английский язык (базовый)",
        ],
        Subject::Mathematics => &["Арифметика", "Базовая алгебра", "Логическое мышление"],
        Subject::Physics => &["Математика (алгебра)", "Базовые понятия о природе"],
        Subject::Chemistry => &["Математика", "Базовые понятия о веществах"],
        Subject::Biology => &["Общие знания о живых организмах"],
        Subject::History => &["Хронологическое мышление", "География (базовая)"],
        Subject::Languages => &["Родной язык (хорошее знание)", "Базовая грамматика"],
        Subject::General => &["Базовая грамотность", "Желание учиться"],
    }
}

/// Returns `true` if the text announces itself as advanced material.
pub fn is_advanced(text: &str) -> bool {
    let lowered = text.to_lowercase();
    ADVANCED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// List the knowledge a reader needs before studying `text`.
///
/// Advanced texts get an intermediate-level requirement in the subject
/// prepended to the subject's baseline list.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn identify_prerequisites(text: &str, subject: Subject) -> Vec<String> {
    let mut prerequisites = Vec::new();
    if is_advanced(text) {
        prerequisites.push(format!(
            "Средний уровень знаний в {}",
            subject.display_name()
        ));
    }
    prerequisites.extend(
        base_prerequisites(subject)
            .iter()
            .map(|item| (*item).to_string()),
    );
    prerequisites
}

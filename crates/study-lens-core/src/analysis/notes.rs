//! Fill-in-the-blank study notes template.

use super::reports::StudyNotesTemplate;

/// Keywords carried into the template.
pub const MAX_NOTE_KEYWORDS: usize = 8;

const BLANK: &str = "___________________________________";

/// Build the notes template around the extracted keywords.
pub fn generate_study_notes_template(keywords: &[String]) -> StudyNotesTemplate {
    let rule = "_".repeat(50);

    StudyNotesTemplate {
        title: "Конспект по материалу".to_string(),
        date: "Дата изучения: __________".to_string(),
        key_points: (1..=5).map(|n| format!("{n}. {BLANK}")).collect(),
        keywords_to_remember: keywords.iter().take(MAX_NOTE_KEYWORDS).cloned().collect(),
        questions_to_answer: vec![
            "Q: Какова основная идея?".to_string(),
            format!("A: {BLANK}"),
            String::new(),
            "Q: Как это применяется на практике?".to_string(),
            format!("A: {BLANK}"),
            String::new(),
            "Q: С чем это связано?".to_string(),
            format!("A: {BLANK}"),
        ],
        summary_space: format!("Краткое резюме своими словами:\n{rule}{}", "\n".repeat(5)),
        reflection: format!("Что я узнал нового?\n{rule}{}", "\n".repeat(3)),
    }
}

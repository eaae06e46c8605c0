//! Category lexicons.
//!
//! Subjects and learning styles are closed enums. Each category maps to a
//! fixed, ordered list of diagnostic keywords. Table order is significant:
//! it is the iteration order used for first-seen tie-breaking.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Coarse topic label assigned to a whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Subject {
    /// Programming and computer science.
    Programming,
    /// Mathematics.
    Mathematics,
    /// Physics.
    Physics,
    /// Chemistry.
    Chemistry,
    /// Biology.
    Biology,
    /// History.
    History,
    /// Languages and linguistics.
    Languages,
    /// No lexicon keyword matched.
    General,
}

impl Subject {
    /// All subjects, lexicon order, with the `general` sentinel last.
    pub const ALL: [Self; 8] = [
        Self::Programming,
        Self::Mathematics,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::History,
        Self::Languages,
        Self::General,
    ];

    /// Returns the lowercase English tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Mathematics => "mathematics",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::History => "history",
            Self::Languages => "languages",
            Self::General => "general",
        }
    }

    /// Returns the Russian name used in generated study material.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Programming => "программирование",
            Self::Mathematics => "математика",
            Self::Physics => "физика",
            Self::Chemistry => "химия",
            Self::Biology => "биология",
            Self::History => "история",
            Self::Languages => "языки",
            Self::General => "общий",
        }
    }

    /// Diagnostic keywords for this subject. Empty for `general`.
    pub fn keywords(&self) -> &'static [&'static str] {
        SUBJECT_LEXICON
            .iter()
            .find(|(subject, _)| subject == self)
            .map_or(&[] as &[&str], |&(_, keywords)| keywords)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == needle || subject.display_name() == needle)
            .ok_or_else(|| AnalysisError::UnknownSubject {
                name: s.to_string(),
                available: Self::ALL.map(|subject| subject.as_str()).join(", "),
            })
    }
}

/// Pedagogical preference suggested by textual cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LearningStyle {
    /// Diagrams, charts, tables, lists.
    Visual,
    /// Lectures, explanations, discussion.
    Auditory,
    /// Exercises, projects, hands-on work.
    Practical,
}

impl LearningStyle {
    /// All styles in lexicon order.
    pub const ALL: [Self; 3] = [Self::Visual, Self::Auditory, Self::Practical];

    /// Ranking returned when the text carries no style signal at all.
    pub const DEFAULT_RANKING: [Self; 3] = [Self::Practical, Self::Visual, Self::Auditory];

    /// Returns the lowercase English tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Practical => "practical",
        }
    }

    /// Returns the Russian name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Visual => "визуальный",
            Self::Auditory => "аудиальный",
            Self::Practical => "практический",
        }
    }

    /// Diagnostic keywords for this style.
    pub fn keywords(&self) -> &'static [&'static str] {
        STYLE_LEXICON
            .iter()
            .find(|(style, _)| style == self)
            .map_or(&[] as &[&str], |&(_, keywords)| keywords)
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == needle || style.display_name() == needle)
            .ok_or_else(|| AnalysisError::UnknownStyle {
                name: s.to_string(),
                available: Self::ALL.map(|style| style.as_str()).join(", "),
            })
    }
}

/// Subject keyword table, in tie-break order.
///
/// `функция` appears under both programming and mathematics.
pub const SUBJECT_LEXICON: &[(Subject, &[&str])] = &[
    (
        Subject::Programming,
        &[
            "код",
            "функция",
            "переменная",
            "класс",
            "объект",
            "алгоритм",
            "программа",
        ],
    ),
    (
        Subject::Mathematics,
        &[
            "уравнение",
            "формула",
            "теорема",
            "доказательство",
            "функция",
            "производная",
        ],
    ),
    (
        Subject::Physics,
        &[
            "энергия",
            "сила",
            "скорость",
            "движение",
            "температура",
            "волна",
        ],
    ),
    (
        Subject::Chemistry,
        &[
            "реакция",
            "элемент",
            "молекула",
            "атом",
            "соединение",
            "вещество",
        ],
    ),
    (
        Subject::Biology,
        &["клетка", "организм", "эволюция", "ген", "белок", "ткань"],
    ),
    (
        Subject::History,
        &[
            "война",
            "революция",
            "империя",
            "государство",
            "культура",
            "событие",
        ],
    ),
    (
        Subject::Languages,
        &[
            "грамматика",
            "слово",
            "предложение",
            "глагол",
            "существительное",
            "текст",
        ],
    ),
];

/// Learning-style keyword table, in tie-break order.
pub const STYLE_LEXICON: &[(LearningStyle, &[&str])] = &[
    (
        LearningStyle::Visual,
        &[
            "диаграмма",
            "схема",
            "график",
            "таблица",
            "рисунок",
            "изображение",
        ],
    ),
    (
        LearningStyle::Auditory,
        &["объяснение", "лекция", "дискуссия", "обсуждение", "диалог"],
    ),
    (
        LearningStyle::Practical,
        &[
            "упражнение",
            "практика",
            "задача",
            "проект",
            "эксперимент",
            "применение",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_general_subject_has_keywords() {
        for subject in Subject::ALL {
            if subject == Subject::General {
                assert!(subject.keywords().is_empty());
            } else {
                assert!(!subject.keywords().is_empty(), "{subject} has no keywords");
            }
        }
    }

    #[test]
    fn lexicon_order_matches_enum_order() {
        let order: Vec<Subject> = SUBJECT_LEXICON.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Subject::ALL[..7].to_vec());
        let styles: Vec<LearningStyle> = STYLE_LEXICON.iter().map(|(s, _)| *s).collect();
        assert_eq!(styles, LearningStyle::ALL.to_vec());
    }

    #[test]
    fn keywords_are_lowercase() {
        let subject_keywords = SUBJECT_LEXICON.iter().flat_map(|(_, k)| k.iter());
        let style_keywords = STYLE_LEXICON.iter().flat_map(|(_, k)| k.iter());
        for kw in subject_keywords.chain(style_keywords) {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn subject_parses_tags_and_russian_names() {
        assert_eq!("programming".parse::<Subject>(), Ok(Subject::Programming));
        assert_eq!(" История ".parse::<Subject>(), Ok(Subject::History));
        assert_eq!("общий".parse::<Subject>(), Ok(Subject::General));
    }

    #[test]
    fn unknown_subject_lists_alternatives() {
        let err = "astrology".parse::<Subject>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("astrology"));
        assert!(msg.contains("programming, mathematics"));
    }

    #[test]
    fn style_parses_and_rejects() {
        assert_eq!("Visual".parse::<LearningStyle>(), Ok(LearningStyle::Visual));
        assert_eq!(
            "практический".parse::<LearningStyle>(),
            Ok(LearningStyle::Practical)
        );
        assert!(matches!(
            "kinesthetic".parse::<LearningStyle>(),
            Err(AnalysisError::UnknownStyle { .. })
        ));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&Subject::Mathematics).unwrap(),
            "\"mathematics\""
        );
        assert_eq!(
            serde_json::to_string(&LearningStyle::Auditory).unwrap(),
            "\"auditory\""
        );
    }
}

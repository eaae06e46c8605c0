//! Flashcard generation from keywords and the sentences that mention them.

use crate::text;

use super::reports::Flashcard;

/// Maximum number of keywords turned into cards.
pub const MAX_FLASHCARDS: usize = 5;

/// Build flashcards for the first five keywords.
///
/// Each card pairs a "what is" prompt with the first sentence that contains
/// the keyword, compared case-insensitively. Keywords that appear in no
/// sentence are skipped, so fewer than five cards may come back.
#[tracing::instrument(skip_all, fields(text_len = text.len(), keywords = keywords.len()))]
pub fn generate_flashcards(text: &str, keywords: &[String]) -> Vec<Flashcard> {
    let sentences: Vec<(&str, String)> = text::split_sentences(text)
        .into_iter()
        .map(|s| (s, s.to_lowercase()))
        .collect();

    keywords
        .iter()
        .take(MAX_FLASHCARDS)
        .filter_map(|keyword| {
            let needle = keyword.to_lowercase();
            sentences
                .iter()
                .find(|(_, lowered)| lowered.contains(&needle))
                .map(|(sentence, _)| Flashcard {
                    front: format!("Что такое {keyword}?"),
                    back: (*sentence).to_string(),
                    keyword: keyword.clone(),
                })
        })
        .collect()
}

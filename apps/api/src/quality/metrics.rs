use crate::models::answers::{AnswerSet, LetterSection};

/// Number of whitespace-separated tokens. Empty or blank text counts 0.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sum of `word_count` over every field of one section.
pub fn section_word_count(section: LetterSection, answers: &AnswerSet) -> usize {
    section
        .fields(answers)
        .into_iter()
        .map(|(_, value)| word_count(value))
        .sum()
}

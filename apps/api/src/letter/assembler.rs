//! Letter Assembler: turns an Answer Set into one plain-text letter.
//!
//! Layout (paragraphs separated by one blank line):
//!   salutation
//!   hook paragraph                      (no transition)
//!   transition + academic paragraph
//!   transition + why-scholarship paragraph
//!   transition + why-turkey paragraph   (opens with the program sentence)
//!   transition + leadership paragraph
//!   transition + future paragraph
//!   transition + closing paragraph
//!   sign-off + name
//!
//! A section with no usable answers is left out entirely, transition included.

use serde::Serialize;

use crate::letter::locale::{applying_sentence, locale_copy, LetterLanguage};
use crate::letter::phrasing::phrase_field;
use crate::letter::transitions::transition;
use crate::models::answers::{AnswerSet, LetterSection};
use crate::quality::metrics::word_count;

pub const WORDS_PER_PAGE: usize = 250;

/// Identifier fields rendered through the program sentence, not as prose.
const PROGRAM_FIELDS: &[&str] = &["universityName", "programName"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterPreview {
    pub letter: String,
    pub missing_steps: Vec<&'static str>,
}

pub fn assemble_letter(answers: &AnswerSet) -> String {
    let language = LetterLanguage::from(answers.settings.language);
    let tone = answers.settings.tone;
    let copy = locale_copy(language);

    let mut paragraphs = vec![copy.salutation.to_string()];

    for section in LetterSection::ALL {
        let Some(body) = section_paragraph(section, answers, language) else {
            continue;
        };
        match transition(tone, language, section) {
            Some(lead_in) => paragraphs.push(format!("{lead_in} {body}")),
            None => paragraphs.push(body),
        }
    }

    let name = answers.settings.full_name.trim();
    let name = if name.is_empty() {
        copy.name_placeholder
    } else {
        name
    };
    paragraphs.push(format!("{}\n{}", copy.sign_off, name));

    paragraphs.join("\n\n")
}

/// The section's answers joined into one paragraph, or `None` when nothing in
/// it renders.
fn section_paragraph(
    section: LetterSection,
    answers: &AnswerSet,
    language: LetterLanguage,
) -> Option<String> {
    let mut sentences = Vec::new();

    if section == LetterSection::WhyTurkey {
        sentences.extend(applying_sentence(
            language,
            &answers.why_turkey.university_name,
            &answers.why_turkey.program_name,
        ));
    }

    for (field, value) in section.fields(answers) {
        if section == LetterSection::WhyTurkey && PROGRAM_FIELDS.contains(&field) {
            continue;
        }
        if let Some(sentence) = phrase_field(language, field, value) {
            sentences.push(sentence);
        }
    }

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}

/// The letter plus the English labels of sections whose anchor field is empty.
///
/// Only the anchor is checked; a section can be "present" here and still fail
/// its step gate.
pub fn letter_with_highlights(answers: &AnswerSet) -> LetterPreview {
    let missing_steps = LetterSection::ALL
        .iter()
        .filter(|section| {
            section
                .field(answers, section.anchor_field())
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|section| section.label())
        .collect();

    LetterPreview {
        letter: assemble_letter(answers),
        missing_steps,
    }
}

/// Words in the assembled letter, salutation and signature included.
pub fn letter_word_count(answers: &AnswerSet) -> usize {
    word_count(&assemble_letter(answers))
}

pub fn estimate_page_count(answers: &AnswerSet) -> usize {
    pages_for_words(letter_word_count(answers))
}

pub fn pages_for_words(words: usize) -> usize {
    words.div_ceil(WORDS_PER_PAGE)
}

//! Axum route handler for the Letter API.

use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::letter::assembler::{letter_with_highlights, pages_for_words};
use crate::models::answers::AnswerSet;
use crate::quality::metrics::word_count;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterResponse {
    pub letter: String,
    pub missing_steps: Vec<&'static str>,
    pub word_count: usize,
    pub page_count: usize,
}

/// POST /api/v1/letter
///
/// Assembles the letter once and derives the counts from that text.
pub async fn handle_assemble_letter(
    Json(answers): Json<AnswerSet>,
) -> Result<Json<LetterResponse>, AppError> {
    let preview = letter_with_highlights(&answers);
    let words = word_count(&preview.letter);
    let pages = pages_for_words(words);

    info!(
        words,
        pages,
        target = answers.settings.target_word_count,
        missing = preview.missing_steps.len(),
        "Letter assembled"
    );

    Ok(Json(LetterResponse {
        letter: preview.letter,
        missing_steps: preview.missing_steps,
        word_count: words,
        page_count: pages,
    }))
}

//! Axum route handlers for the Quality and Steps APIs.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::answers::{AnswerSet, LetterSection};
use crate::quality::detectors::{detect_cliches, detect_generic_phrases};
use crate::quality::metrics::word_count;
use crate::quality::patterns::FALLBACK_LANGUAGE;
use crate::quality::scoring::{quality_score, QualityScore};
use crate::quality::specificity::specificity_score;
use crate::quality::step_gate::{is_step_complete, step_progress, StepProgress, STEP_COUNT};
use crate::quality::suggestions::improvement_suggestion;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub word_count: usize,
    pub cliches: Vec<String>,
    pub generic_phrases: Vec<String>,
    pub specificity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub text: String,
    pub field_type: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StepCompleteResponse {
    pub step: usize,
    pub complete: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quality/score
pub async fn handle_quality_score(
    State(state): State<AppState>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<QualityScore>, AppError> {
    let score = quality_score(&state.patterns, &state.weights, &answers);
    info!(
        overall = score.overall,
        issues = score.issues.len(),
        "Quality score computed"
    );
    Ok(Json(score))
}

/// POST /api/v1/quality/analyze
///
/// Live feedback for a single field while the applicant types.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let language = request
        .language
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(FALLBACK_LANGUAGE);

    let response = AnalyzeResponse {
        word_count: word_count(&request.text),
        cliches: detect_cliches(&state.patterns, &request.text, language),
        generic_phrases: detect_generic_phrases(&state.patterns, &request.text),
        specificity: specificity_score(&state.patterns, &request.text),
    };

    debug!(
        language,
        words = response.word_count,
        cliches = response.cliches.len(),
        generic = response.generic_phrases.len(),
        specificity = response.specificity,
        "Field analyzed"
    );
    Ok(Json(response))
}

/// POST /api/v1/quality/suggestion
pub async fn handle_suggestion(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let suggestion = improvement_suggestion(&state.patterns, &request.text, &request.field_type);
    debug!(
        field_type = %request.field_type,
        has_suggestion = suggestion.is_some(),
        "Suggestion evaluated"
    );
    Ok(Json(SuggestionResponse { suggestion }))
}

/// POST /api/v1/steps/:step/complete
///
/// Whether the wizard may advance past `step`.
pub async fn handle_step_complete(
    step: Result<Path<usize>, PathRejection>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<StepCompleteResponse>, AppError> {
    let step_out_of_range = || {
        AppError::Validation(format!("step must be between 0 and {}", STEP_COUNT - 1))
    };
    let Path(step) = step.map_err(|_| step_out_of_range())?;
    let section = LetterSection::from_step(step).ok_or_else(step_out_of_range)?;

    let complete = is_step_complete(step, &answers);
    debug!(step, section = section.label(), complete, "Step gate checked");
    Ok(Json(StepCompleteResponse { step, complete }))
}

/// POST /api/v1/steps/progress
pub async fn handle_step_progress(
    Json(answers): Json<AnswerSet>,
) -> Result<Json<Vec<StepProgress>>, AppError> {
    let progress = step_progress(&answers);
    let completed = progress.iter().filter(|p| p.complete).count();
    debug!(completed, total = progress.len(), "Step progress computed");
    Ok(Json(progress))
}

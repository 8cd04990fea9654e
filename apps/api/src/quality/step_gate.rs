//! Step-Completion Gate: minimum content per wizard step.
//!
//! Not the completeness score: thresholds differ (20 chars for narrative
//! fields, 3–5 for identifiers, 2 for the name) and so does the field set.

use serde::Serialize;

use crate::models::answers::{AnswerSet, LetterSection};
use crate::quality::metrics::section_word_count;

pub const STEP_COUNT: usize = 7;

/// Required `(field path, minimum trimmed chars)` per step index.
static STEP_REQUIREMENTS: [&[(&str, usize)]; STEP_COUNT] = [
    &[
        ("hook.openingStatement", 20),
        ("hook.fieldOfInterest", 5),
        ("hook.careerGoal", 20),
    ],
    &[
        ("academic.currentEducation", 20),
        ("academic.relevantCourses", 20),
        ("academic.academicAchievements", 20),
    ],
    &[
        ("whyScholarship.whatAttracted", 20),
        ("whyScholarship.alignmentWithGoals", 20),
    ],
    &[
        ("whyTurkey.countryReasons", 20),
        ("whyTurkey.universityName", 3),
        ("whyTurkey.programName", 3),
        ("whyTurkey.whyThisProgram", 20),
    ],
    &[
        ("leadership.situation", 20),
        ("leadership.task", 20),
        ("leadership.action", 20),
        ("leadership.result", 20),
    ],
    &[
        ("future.shortTermGoals", 20),
        ("future.longTermGoals", 20),
        ("future.impactOnCommunity", 20),
    ],
    &[("closing.commitment", 20), ("settings.fullName", 2)],
];

/// True when every required field of `step` meets its threshold.
/// Steps outside 0–6 are never complete.
pub fn is_step_complete(step: usize, answers: &AnswerSet) -> bool {
    let Some(requirements) = STEP_REQUIREMENTS.get(step) else {
        return false;
    };
    requirements.iter().all(|(path, min_chars)| {
        answers
            .value_of(path)
            .map(|v| v.trim().chars().count() >= *min_chars)
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress {
    pub step: usize,
    pub label: &'static str,
    pub complete: bool,
    pub word_count: usize,
}

/// Completion and word count for every step, for the wizard's progress bar.
pub fn step_progress(answers: &AnswerSet) -> Vec<StepProgress> {
    LetterSection::ALL
        .iter()
        .map(|section| StepProgress {
            step: section.step(),
            label: section.label(),
            complete: is_step_complete(section.step(), answers),
            word_count: section_word_count(*section, answers),
        })
        .collect()
}

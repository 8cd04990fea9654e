use crate::models::answers::AnswerSet;

/// Minimum trimmed length (chars) for a field to count as filled.
const FILLED_MIN_CHARS: usize = 10;

/// Fields that make up the completeness score, as dotted paths.
const REQUIRED_FIELDS: &[&str] = &[
    "hook.openingStatement",
    "hook.fieldOfInterest",
    "hook.careerGoal",
    "academic.currentEducation",
    "academic.relevantCourses",
    "academic.academicAchievements",
    "whyScholarship.whatAttracted",
    "whyScholarship.alignmentWithGoals",
    "whyTurkey.countryReasons",
    "whyTurkey.universityName",
    "whyTurkey.programName",
    "whyTurkey.whyThisProgram",
    "leadership.situation",
    "leadership.task",
    "leadership.action",
    "leadership.result",
    "future.shortTermGoals",
    "future.longTermGoals",
    "future.impactOnCommunity",
    "closing.commitment",
    "settings.fullName",
];

/// Share of required fields with at least 10 trimmed characters, 0–100.
pub fn completeness_score(answers: &AnswerSet) -> u32 {
    let filled = REQUIRED_FIELDS
        .iter()
        .filter(|path| {
            answers
                .value_of(path)
                .map(|v| v.trim().chars().count() >= FILLED_MIN_CHARS)
                .unwrap_or(false)
        })
        .count();
    ((filled as f64 / REQUIRED_FIELDS.len() as f64) * 100.0).round() as u32
}

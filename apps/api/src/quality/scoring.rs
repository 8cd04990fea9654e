//! Quality Aggregator: combines the four scorers into one weighted score and
//! itemizes issues per field.
//!
//! Two granularities over the same tables: the cliché score counts matches in
//! the whole concatenated draft, issues are raised field by field.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::answers::{AnswerSet, LetterSection};
use crate::quality::completeness::completeness_score;
use crate::quality::detectors::{detect_cliches, detect_generic_phrases};
use crate::quality::future_clarity::future_clarity_score;
use crate::quality::metrics::word_count;
use crate::quality::patterns::PatternLibrary;
use crate::quality::specificity::specificity_score;

const CLICHE_PENALTY: u32 = 10;
const TOO_SHORT_WORDS: usize = 10;
/// Fields exempt from the too-short check.
const SHORT_ALLOWED_FIELDS: &[&str] = &["gratitude"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityWeights {
    pub specificity: f64,
    pub completeness: f64,
    pub cliche: f64,
    pub future_clarity: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            specificity: 0.25,
            completeness: 0.30,
            cliche: 0.20,
            future_clarity: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Cliche,
    Generic,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub step: usize,
    pub field: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub overall: u32,
    pub specificity: u32,
    pub completeness: u32,
    pub cliche_score: u32,
    pub future_clarity: u32,
    pub issues: Vec<QualityIssue>,
}

/// 100 minus 10 per cliché or generic match in the whole draft, floored at 0.
/// Clichés use the draft's language (unlisted languages fall back to English).
pub fn cliche_score(patterns: &PatternLibrary, answers: &AnswerSet) -> u32 {
    let text = answers.all_text();
    let matches = detect_cliches(patterns, &text, answers.settings.language.code()).len()
        + detect_generic_phrases(patterns, &text).len();
    100u32.saturating_sub(CLICHE_PENALTY.saturating_mul(matches as u32))
}

/// overall = round(specificity×w + completeness×w + cliché×w + future×w)
pub fn compute_overall(
    specificity: u32,
    completeness: u32,
    cliche: u32,
    future_clarity: u32,
    weights: &QualityWeights,
) -> u32 {
    (specificity as f64 * weights.specificity
        + completeness as f64 * weights.completeness
        + cliche as f64 * weights.cliche
        + future_clarity as f64 * weights.future_clarity)
        .round()
        .clamp(0.0, 100.0) as u32
}

pub fn quality_score(
    patterns: &PatternLibrary,
    weights: &QualityWeights,
    answers: &AnswerSet,
) -> QualityScore {
    let specificity = specificity_score(patterns, &answers.all_text());
    let completeness = completeness_score(answers);
    let cliche = cliche_score(patterns, answers);
    let future_clarity = future_clarity_score(answers);
    let overall = compute_overall(specificity, completeness, cliche, future_clarity, weights);
    let issues = collect_issues(patterns, answers);

    debug!(
        overall,
        specificity,
        completeness,
        cliche,
        future_clarity,
        issues = issues.len(),
        "Quality scored"
    );

    QualityScore {
        overall,
        specificity,
        completeness,
        cliche_score: cliche,
        future_clarity,
        issues,
    }
}

/// Issues in section order, then field order; per field clichés come before
/// generic phrases, and a too-short issue comes last.
pub fn collect_issues(patterns: &PatternLibrary, answers: &AnswerSet) -> Vec<QualityIssue> {
    let language = answers.settings.language.code();
    let mut issues = Vec::new();

    for section in LetterSection::ALL {
        let step = section.step();
        for (field, value) in section.fields(answers) {
            for phrase in detect_cliches(patterns, value, language) {
                issues.push(QualityIssue {
                    step,
                    field: field.to_string(),
                    issue_type: IssueType::Cliche,
                    message: format!("Cliché detected: \"{phrase}\""),
                    suggestion:
                        "Replace it with a specific moment or experience that only you could describe."
                            .to_string(),
                });
            }

            for phrase in detect_generic_phrases(patterns, value) {
                issues.push(QualityIssue {
                    step,
                    field: field.to_string(),
                    issue_type: IssueType::Generic,
                    message: format!("Generic phrase: \"{phrase}\""),
                    suggestion: "Back this claim with a concrete example or a measurable result."
                        .to_string(),
                });
            }

            let words = word_count(value);
            if words < TOO_SHORT_WORDS && !SHORT_ALLOWED_FIELDS.contains(&field) {
                issues.push(QualityIssue {
                    step,
                    field: field.to_string(),
                    issue_type: IssueType::TooShort,
                    message: format!(
                        "This answer is too short ({words} words; aim for at least {TOO_SHORT_WORDS})."
                    ),
                    suggestion: "Expand it with names, dates, numbers, or outcomes.".to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answers::Language;
    use crate::models::fixtures::fill_all;

    const LONG_PLAIN: &str =
        "I studied chemistry at a public school and worked in a small lab every weekend";

    fn lib() -> PatternLibrary {
        PatternLibrary::default()
    }

    #[test]
    fn test_cliche_score_clean_draft_is_100() {
        let mut a = AnswerSet::default();
        a.hook.opening_statement = LONG_PLAIN.to_string();
        assert_eq!(cliche_score(&lib(), &a), 100);
    }

    #[test]
    fn test_cliche_score_two_matches_is_80() {
        let mut a = AnswerSet::default();
        a.hook.opening_statement = "Since childhood I loved science.".to_string();
        a.leadership.action = "I acted as a team player.".to_string();
        assert_eq!(cliche_score(&lib(), &a), 80);
    }

    #[test]
    fn test_cliche_score_never_negative() {
        let mut a = AnswerSet::default();
        a.hook.opening_statement = "Since childhood I always wanted to pursue my dreams, \
            make a difference, change the world and make it a better place."
            .to_string();
        a.academic.skills_gained = "I am hardworking, a team player, a fast learner, \
            detail-oriented, self-motivated, results-driven with good communication skills."
            .to_string();
        assert_eq!(cliche_score(&lib(), &a), 0);
    }

    #[test]
    fn test_cliche_score_uses_draft_language() {
        let mut a = AnswerSet::default();
        a.hook.opening_statement = "Cocuklugumdan beri muhendis olmak istiyorum.".to_string();
        assert_eq!(cliche_score(&lib(), &a), 100);
        a.settings.language = Language::Tr;
        assert_eq!(cliche_score(&lib(), &a), 90);
        a.settings.language = Language::Ar;
        a.hook.opening_statement = "Since childhood".to_string();
        assert_eq!(cliche_score(&lib(), &a), 90);
    }

    #[test]
    fn test_compute_overall_weighted_rounding() {
        let w = QualityWeights::default();
        // 50×0.25 + 40×0.30 + 90×0.20 + 33×0.25 = 12.5 + 12 + 18 + 8.25 = 50.75
        assert_eq!(compute_overall(50, 40, 90, 33, &w), 51);
        assert_eq!(compute_overall(100, 100, 100, 100, &w), 100);
        assert_eq!(compute_overall(0, 0, 0, 0, &w), 0);
    }

    #[test]
    fn test_empty_answers_overall_is_cliche_weight_only() {
        let score = quality_score(&lib(), &QualityWeights::default(), &AnswerSet::default());
        assert_eq!(score.specificity, 0);
        assert_eq!(score.completeness, 0);
        assert_eq!(score.cliche_score, 100);
        assert_eq!(score.future_clarity, 0);
        assert_eq!(score.overall, 20);
    }

    #[test]
    fn test_overall_matches_components() {
        let mut a = AnswerSet::default();
        a.hook.opening_statement = "Since childhood I have been a team player.".to_string();
        a.future.short_term_goals =
            "Within 2 years I will work as an engineer in my city.".to_string();
        a.settings.full_name = "Ahmed Ibrahim".to_string();
        let w = QualityWeights::default();
        let s = quality_score(&lib(), &w, &a);
        assert!(s.overall <= 100);
        assert_eq!(
            s.overall,
            compute_overall(s.specificity, s.completeness, s.cliche_score, s.future_clarity, &w)
        );
    }

    #[test]
    fn test_empty_answers_flag_every_field_but_gratitude() {
        let issues = collect_issues(&lib(), &AnswerSet::default());
        assert_eq!(issues.len(), 25);
        assert!(issues.iter().all(|i| i.issue_type == IssueType::TooShort));
        assert!(issues.iter().all(|i| i.field != "gratitude"));
        assert_eq!(issues[0].field, "openingStatement");
        assert_eq!(issues[0].step, 0);
        assert_eq!(issues[24].field, "commitment");
        assert_eq!(issues[24].step, 6);
    }

    #[test]
    fn test_issue_order_cliche_then_generic_then_short() {
        let mut a = AnswerSet::default();
        fill_all(&mut a, LONG_PLAIN);
        a.academic.relevant_courses = "Team player since childhood".to_string();
        let issues = collect_issues(&lib(), &a);
        let kinds: Vec<IssueType> = issues.iter().map(|i| i.issue_type).collect();
        assert_eq!(
            kinds,
            vec![IssueType::Cliche, IssueType::Generic, IssueType::TooShort]
        );
        assert!(issues.iter().all(|i| i.field == "relevantCourses" && i.step == 1));
        assert!(issues[0].message.contains("since childhood"));
        assert!(issues[1].message.contains("team player"));
    }

    #[test]
    fn test_issues_follow_section_order() {
        let mut a = AnswerSet::default();
        fill_all(&mut a, LONG_PLAIN);
        a.closing.commitment = format!("{LONG_PLAIN} and I will make a difference");
        a.hook.career_goal = format!("{LONG_PLAIN} as a fast learner");
        let issues = collect_issues(&lib(), &a);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "careerGoal");
        assert_eq!(issues[0].issue_type, IssueType::Generic);
        assert_eq!(issues[1].field, "commitment");
        assert_eq!(issues[1].issue_type, IssueType::Cliche);
    }

    #[test]
    fn test_short_gratitude_is_allowed() {
        let mut a = AnswerSet::default();
        fill_all(&mut a, LONG_PLAIN);
        a.closing.gratitude = "Thank you.".to_string();
        assert!(collect_issues(&lib(), &a).is_empty());
    }

    #[test]
    fn test_issue_serializes_type_tag() {
        let issue = QualityIssue {
            step: 4,
            field: "result".to_string(),
            issue_type: IssueType::TooShort,
            message: "m".to_string(),
            suggestion: "s".to_string(),
        };
        let v = serde_json::to_value(&issue).unwrap();
        assert_eq!(v["type"], "too_short");
        assert_eq!(v["step"], 4);
    }
}

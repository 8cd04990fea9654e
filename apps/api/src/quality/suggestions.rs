//! Suggestion Engine: at most one hint per field, first applicable rule wins.

use crate::quality::detectors::{detect_cliches, detect_generic_phrases};
use crate::quality::metrics::word_count;
use crate::quality::patterns::{PatternLibrary, FALLBACK_LANGUAGE};
use crate::quality::specificity::specificity_score;

const MIN_WORDS: usize = 10;
const EXPAND_BELOW_WORDS: usize = 30;
const LOW_SPECIFICITY: u32 = 30;

/// Returns the next thing the applicant should add to this field, or `None`
/// when the answer reads as adequate.
///
/// Suggestions are checked against the English cliché list; the field text
/// alone carries no language setting.
pub fn improvement_suggestion(
    patterns: &PatternLibrary,
    text: &str,
    field_type: &str,
) -> Option<String> {
    let words = word_count(text);
    if words < MIN_WORDS {
        return Some(
            "Your answer is still short. Use the guiding questions for this section to add more detail."
                .to_string(),
        );
    }

    if let Some(cliche) = detect_cliches(patterns, text, FALLBACK_LANGUAGE).first() {
        return Some(format!(
            "Replace \"{cliche}\" with something specific and personal: a moment, a place, or a result only you can describe."
        ));
    }

    if let Some(generic) = detect_generic_phrases(patterns, text).first() {
        return Some(format!(
            "\"{generic}\" is a claim without proof. Add a concrete example that shows it."
        ));
    }

    if specificity_score(patterns, text) < LOW_SPECIFICITY {
        return Some(specificity_nudge(field_type).to_string());
    }

    if words < EXPAND_BELOW_WORDS {
        return Some("Good start! Expand with more detail to make this answer stronger.".to_string());
    }

    None
}

fn specificity_nudge(field_type: &str) -> &'static str {
    match field_type {
        "result" | "measurableOutcomes" => {
            "Quantify the outcome: add numbers, percentages, or amounts (e.g. \"raised attendance by 40%\")."
        }
        "whyThisProgram" | "specificDetails" => {
            "Name specific professors, labs, or courses in the program that match your goals."
        }
        "academicAchievements" => {
            "Include your GPA, class ranking, or awards, with numbers where possible."
        }
        _ => "Make it more specific: add names, dates, numbers, or concrete outcomes.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAGUE: &str = "I worked very hard on this and it went well for everyone who took part in it.";

    fn suggest(text: &str, field: &str) -> Option<String> {
        improvement_suggestion(&PatternLibrary::default(), text, field)
    }

    #[test]
    fn test_short_text_prompts_guiding_questions() {
        let s = suggest("Too short.", "result").unwrap();
        assert!(s.contains("guiding questions"));
        assert!(suggest("", "hook").unwrap().contains("guiding questions"));
    }

    #[test]
    fn test_first_cliche_is_named() {
        let s = suggest(
            "Since childhood I have always wanted to study engineering abroad in a good school.",
            "openingStatement",
        )
        .unwrap();
        assert!(s.contains("\"since childhood\""), "got {s}");
    }

    #[test]
    fn test_generic_checked_after_cliches() {
        let s = suggest(
            "I am a team player and I have worked with many groups in different settings.",
            "action",
        )
        .unwrap();
        assert!(s.contains("\"team player\""), "got {s}");
        assert!(s.contains("concrete example"));
    }

    #[test]
    fn test_low_specificity_nudges_by_field_type() {
        assert!(suggest(VAGUE, "result").unwrap().contains("percentages"));
        assert!(suggest(VAGUE, "measurableOutcomes").unwrap().contains("percentages"));
        assert!(suggest(VAGUE, "whyThisProgram").unwrap().contains("professors"));
        assert!(suggest(VAGUE, "specificDetails").unwrap().contains("labs"));
        assert!(suggest(VAGUE, "academicAchievements").unwrap().contains("GPA"));
        assert!(suggest(VAGUE, "task").unwrap().contains("names, dates, numbers"));
    }

    #[test]
    fn test_specific_but_brief_text_gets_expand_hint() {
        let text = "In 2023 I founded a coding club at the University of Ibadan that grew to 40 members and won 2nd place.";
        let s = suggest(text, "action").unwrap();
        assert!(s.starts_with("Good start"), "got {s}");
    }

    #[test]
    fn test_adequate_text_gets_no_suggestion() {
        let text = "In 2023 I founded a coding club at the University of Ibadan with a team of \
                    4 volunteers. Within 6 months we grew to 40 members, won 2nd place at the \
                    national hackathon, and increased the pass rate in our programming course by 25% \
                    according to the department.";
        assert_eq!(suggest(text, "result"), None);
    }
}

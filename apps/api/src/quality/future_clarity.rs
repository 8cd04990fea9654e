//! Future-Clarity Scorer: does the Future section read like a plan?

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::answers::{AnswerSet, LetterSection};
use crate::quality::metrics::word_count;

static TIMELINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+\s*(?:years?|months?)\b").unwrap());

static SCHEDULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:within|by|after|before)\b").unwrap());

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s?%").unwrap());

static COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+\s+(?:students|people|projects|companies)\b").unwrap()
});

static ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:researcher|professor|engineer|doctor|founder|manager|director|specialist)",
    )
    .unwrap()
});

static COMMUNITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\bmy country\b|\bmy home country\b",
        r"|\b(?:africa|asia|europe|middle east|latin america|balkans|caucasus)\b",
        r"|\b(?:turkey|turkiye|türkiye|egypt|nigeria|pakistan|indonesia|somalia|syria|yemen",
        r"|afghanistan|bangladesh|kenya|ethiopia|sudan|morocco|algeria|iraq|jordan|palestine)\b",
        r"|\b(?:region|regional|community|communities|village|villages|city|cities)\b",
    ))
    .unwrap()
});

/// (pattern, points) rules applied to the concatenated Future section.
static CLARITY_RULES: [(&Lazy<Regex>, u32); 6] = [
    (&TIMELINE_RE, 20),
    (&SCHEDULE_RE, 10),
    (&PERCENT_RE, 15),
    (&COUNT_RE, 15),
    (&ROLE_RE, 15),
    (&COMMUNITY_RE, 10),
];

const LONG_PLAN_WORDS: usize = 100;
const LONG_PLAN_BONUS: u32 = 15;
const MEDIUM_PLAN_WORDS: usize = 50;
const MEDIUM_PLAN_BONUS: u32 = 10;

pub fn future_clarity_score(answers: &AnswerSet) -> u32 {
    let text = LetterSection::Future
        .fields(answers)
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ");

    let mut score: u32 = CLARITY_RULES
        .iter()
        .filter(|(re, _)| re.is_match(&text))
        .map(|(_, points)| points)
        .sum();

    let words = word_count(&text);
    if words >= LONG_PLAN_WORDS {
        score += LONG_PLAN_BONUS;
    } else if words >= MEDIUM_PLAN_WORDS {
        score += MEDIUM_PLAN_BONUS;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_future_scores_zero() {
        assert_eq!(future_clarity_score(&AnswerSet::default()), 0);
    }

    #[test]
    fn test_vague_plan_scores_zero() {
        let mut a = AnswerSet::default();
        a.future.short_term_goals = "I want to be successful and happy.".to_string();
        assert_eq!(future_clarity_score(&a), 0);
    }

    #[test]
    fn test_each_signal_counts_once() {
        let mut a = AnswerSet::default();
        a.future.short_term_goals = "Within 2 years I will work as a data engineer.".to_string();
        // timeline 20 + schedule 10 + role 15
        assert_eq!(future_clarity_score(&a), 45);

        a.future.impact_on_community =
            "I will train 50 students in my village and cut dropout by 30%.".to_string();
        // + count 15 + community 10 + percent 15
        assert_eq!(future_clarity_score(&a), 85);
    }

    #[test]
    fn test_signals_combine_across_fields() {
        let mut a = AnswerSet::default();
        a.future.short_term_goals = "after graduation".to_string();
        a.future.measurable_outcomes = "reach 20%".to_string();
        assert_eq!(future_clarity_score(&a), 25);
    }

    #[test]
    fn test_length_bonus_and_cap() {
        let mut a = AnswerSet::default();
        a.future.short_term_goals =
            "Within 2 years I will work as a data engineer and mentor 40 students.".to_string();
        a.future.impact_on_community =
            "I will cut energy costs in my city by 25% through open tools.".to_string();
        a.future.long_term_goals = "plan ".repeat(100);
        assert_eq!(future_clarity_score(&a), 100);
    }

    #[test]
    fn test_medium_length_bonus() {
        let mut a = AnswerSet::default();
        a.future.long_term_goals = "plan ".repeat(60);
        assert_eq!(future_clarity_score(&a), 10);
        a.future.long_term_goals = "plan ".repeat(100);
        assert_eq!(future_clarity_score(&a), 15);
    }
}

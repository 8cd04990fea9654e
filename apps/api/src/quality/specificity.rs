//! Specificity Scorer: how much checkable detail a text carries.
//!
//! score = clamp(round(points / max_indicator_points × 100), 0, 100) where
//! points = 8 per matching indicator + named-entity bonus (≤20)
//!        + numeric bonus (≤15) − 20 for texts under 20 words.
//!
//! The denominator is the indicator-only maximum even though the bonuses and
//! the penalty are added first; scores saturate before every indicator hits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::quality::metrics::word_count;
use crate::quality::patterns::{PatternLibrary, INDICATOR_POINTS};

const NAMED_ENTITY_POINTS: i32 = 4;
const NAMED_ENTITY_CAP: i32 = 20;
const NUMBER_POINTS: i32 = 3;
const NUMBER_CAP: i32 = 15;
const SHORT_TEXT_WORDS: usize = 20;
const SHORT_TEXT_PENALTY: i32 = 20;

/// Capitalized word right after a lowercase word: proper nouns mid-sentence.
static NAMED_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z] [A-Z]").unwrap());

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

pub fn specificity_score(patterns: &PatternLibrary, text: &str) -> u32 {
    if text.trim().is_empty() {
        return 0;
    }
    let max_points = patterns.max_indicator_points();
    if max_points <= 0 {
        return 0;
    }

    let indicator_hits = patterns
        .indicators()
        .iter()
        .filter(|re| re.is_match(text))
        .count() as i32;
    let mut points = indicator_hits * INDICATOR_POINTS;

    let named_entities = NAMED_ENTITY_RE.find_iter(text).count() as i32;
    points += (named_entities * NAMED_ENTITY_POINTS).min(NAMED_ENTITY_CAP);

    let numbers = DIGIT_RUN_RE.find_iter(text).count() as i32;
    points += (numbers * NUMBER_POINTS).min(NUMBER_CAP);

    if word_count(text) < SHORT_TEXT_WORDS {
        points -= SHORT_TEXT_PENALTY;
    }

    ((points as f64 / max_points as f64) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32
}

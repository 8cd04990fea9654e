//! Pattern Library: the phrase and indicator tables every detector reads.
//!
//! Tables are data. Detectors loop over whatever is loaded here, so new
//! languages, phrases, or indicators come in through `PatternOverrides`
//! without touching detector code.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Language whose cliché list is used for any code without its own list.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Points each matching specificity indicator contributes.
pub const INDICATOR_POINTS: i32 = 8;

const EN_CLICHES: &[&str] = &[
    "since childhood",
    "since i was a child",
    "since i was young",
    "from a young age",
    "ever since i can remember",
    "always wanted",
    "always dreamed",
    "pursue my dreams",
    "follow my dreams",
    "dream come true",
    "passionate about",
    "my passion for",
    "make a difference",
    "change the world",
    "better place",
    "golden opportunity",
    "once in a lifetime",
    "broaden my horizons",
    "in today's world",
    "in this modern era",
    "i believe that",
    "last but not least",
];

// ASCII spellings first, the way most applicants type on non-Turkish keyboards.
const TR_CLICHES: &[&str] = &[
    "cocuklugumdan beri",
    "çocukluğumdan beri",
    "kucuklugumden beri",
    "küçüklüğümden beri",
    "her zaman istedim",
    "hep hayal ettim",
    "hayallerimin pesinden",
    "hayallerimin peşinden",
    "hayalimdeki",
    "fark yaratmak",
    "dunyayi degistirmek",
    "dünyayı değiştirmek",
    "tutkuluyum",
    "altin bir firsat",
    "altın bir fırsat",
    "hayatimin firsati",
    "hayatımın fırsatı",
];

const GENERIC_PHRASES: &[&str] = &[
    "i am hardworking",
    "i am a hardworking",
    "hard-working person",
    "good communication skills",
    "strong communication skills",
    "problem-solving skills",
    "problem solving skills",
    "team player",
    "fast learner",
    "quick learner",
    "detail-oriented",
    "self-motivated",
    "highly motivated",
    "think outside the box",
    "strong leadership skills",
    "work well under pressure",
    "results-driven",
];

const SPECIFICITY_INDICATORS: &[&str] = &[
    // percentages
    r"\d+(?:\.\d+)?\s?%",
    // counted nouns
    r"(?i)\b\d+\s+(?:students|members|projects|hours|years|people|participants|volunteers)\b",
    // academic authority
    r"(?i)\b(?:professors?|prof\.|dr\.|labs?\b|laborator(?:y|ies)|department)",
    // institutions
    r"(?i)\buniversity of\s+\w+",
    // money
    r"(?i)[$€£₺]\s?\d[\d,.]*|\b\d[\d,.]*\s?(?:usd|dollars|euros?|tl|lira)\b",
    // years
    r"\b(?:19|20)\d{2}\b",
    // ordinal ranks
    r"(?i)\b\d+(?:st|nd|rd|th)\b|\b(?:first|second|third)\s+(?:place|prize|rank)\b",
    // achievement verbs
    r"(?i)\b(?:published|won|awarded|achieved)\b",
    // change verbs
    r"(?i)\b(?:increased|improved|reduced|decreased)\b",
    // grades
    r"(?i)\b(?:gpa|rank|ranked|score|scored)\b",
    // founding verbs
    r"(?i)\b(?:founded|co-founded|established|launched)\b",
    // group size
    r"(?i)\bteam of\b|\bcommittee\b",
];

static BUILTIN_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SPECIFICITY_INDICATORS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Phrase and indicator tables used by detectors and scorers.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    cliches: HashMap<String, Vec<String>>,
    generic_phrases: Vec<String>,
    indicators: Vec<Regex>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        let mut cliches = HashMap::new();
        cliches.insert("en".to_string(), to_owned_list(EN_CLICHES));
        cliches.insert("tr".to_string(), to_owned_list(TR_CLICHES));
        Self {
            cliches,
            generic_phrases: to_owned_list(GENERIC_PHRASES),
            indicators: BUILTIN_INDICATORS.clone(),
        }
    }
}

/// Additions merged on top of the built-in tables (loaded from `PATTERNS_FILE`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternOverrides {
    pub cliches: HashMap<String, Vec<String>>,
    pub generic_phrases: Vec<String>,
    pub specificity_indicators: Vec<String>,
}

impl PatternOverrides {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Pattern file '{}' is not valid JSON", path.display()))
    }
}

impl PatternLibrary {
    /// Cliché list for `language`, or the English list for unlisted codes.
    pub fn cliches_for(&self, language: &str) -> &[String] {
        let key = language.trim().to_lowercase();
        self.cliches
            .get(&key)
            .or_else(|| self.cliches.get(FALLBACK_LANGUAGE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn generic_phrases(&self) -> &[String] {
        &self.generic_phrases
    }

    pub fn indicators(&self) -> &[Regex] {
        &self.indicators
    }

    /// Upper bound of the indicator term of the specificity score.
    pub fn max_indicator_points(&self) -> i32 {
        self.indicators.len() as i32 * INDICATOR_POINTS
    }

    /// Merges `overrides` into this library. Phrases are lowercased and
    /// appended after existing entries; duplicates are skipped.
    pub fn with_overrides(mut self, overrides: PatternOverrides) -> Result<Self> {
        for (language, phrases) in overrides.cliches {
            let list = self.cliches.entry(language.to_lowercase()).or_default();
            merge_phrases(list, phrases);
        }
        merge_phrases(&mut self.generic_phrases, overrides.generic_phrases);
        for pattern in overrides.specificity_indicators {
            let regex = Regex::new(&pattern)
                .with_context(|| format!("Invalid specificity indicator pattern '{pattern}'"))?;
            self.indicators.push(regex);
        }
        Ok(self)
    }
}

fn to_owned_list(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

fn merge_phrases(list: &mut Vec<String>, phrases: Vec<String>) {
    for phrase in phrases {
        let phrase = phrase.trim().to_lowercase();
        if !phrase.is_empty() && !list.contains(&phrase) {
            list.push(phrase);
        }
    }
}

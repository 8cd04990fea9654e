//! Substring detectors over the pattern tables.

use crate::quality::patterns::PatternLibrary;

/// Clichés from `language`'s list that occur in `text`, case-insensitively,
/// in table order. Unlisted language codes use the English list.
pub fn detect_cliches(patterns: &PatternLibrary, text: &str, language: &str) -> Vec<String> {
    find_phrases(patterns.cliches_for(language), text)
}

/// Generic self-descriptions that occur in `text`, in table order.
pub fn detect_generic_phrases(patterns: &PatternLibrary, text: &str) -> Vec<String> {
    find_phrases(patterns.generic_phrases(), text)
}

fn find_phrases(phrases: &[String], text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }
    let folded_text = fold_case(text);
    let mut seen: Vec<String> = Vec::new();
    let mut found = Vec::new();
    for phrase in phrases {
        let folded = fold_case(phrase);
        // ASCII and dotless spellings of one phrase fold together; report the first.
        if folded_text.contains(&folded) && !seen.contains(&folded) {
            found.push(phrase.clone());
            seen.push(folded);
        }
    }
    found
}

/// Lowercases with the Turkish i variants (`I`, `İ`, `ı`) folded to `i`.
/// Plain `to_lowercase` turns `İ` into `i` plus a combining dot and never
/// yields `ı`, so upper-case Turkish would miss the table.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' | 'İ' | 'ı' => 'i'.to_lowercase(),
            other => other.to_lowercase(),
        })
        .collect()
}

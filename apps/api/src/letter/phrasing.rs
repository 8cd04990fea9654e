//! Field connectors: the clause each answer is introduced with inside its
//! paragraph ("Key coursework includes …", "As a result, …").
//!
//! A connector is skipped when the answer already opens with an equivalent
//! phrase, so the letter never says "As a result, as a result".

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::letter::locale::LetterLanguage;

#[derive(Debug, Clone, Copy)]
pub struct Connector {
    pub lead: &'static str,
    /// Lowercase openings that make `lead` redundant.
    pub equivalents: &'static [&'static str],
}

const EN_CONNECTORS: &[(&str, Connector)] = &[
    (
        "fieldOfInterest",
        Connector {
            lead: "I am particularly interested in",
            equivalents: &["i am", "i'm", "my field", "my interest", "my area", "i have been"],
        },
    ),
    (
        "careerGoal",
        Connector {
            lead: "My career goal is to",
            equivalents: &[
                "my career goal", "my goal", "i aim", "i want", "i plan", "i hope", "i intend",
                "ultimately",
            ],
        },
    ),
    (
        "relevantCourses",
        Connector {
            lead: "Key coursework includes",
            equivalents: &[
                "key coursework", "my coursework", "coursework", "courses", "relevant courses",
                "i have taken", "i took", "i completed",
            ],
        },
    ),
    (
        "academicAchievements",
        Connector {
            lead: "My academic achievements include",
            equivalents: &[
                "my academic achievements", "my achievements", "i achieved", "i was awarded",
                "i won", "i received", "i earned", "i graduated", "i ranked", "ranked",
            ],
        },
    ),
    (
        "skillsGained",
        Connector {
            lead: "Through my studies, I developed",
            equivalents: &[
                "through", "i developed", "i gained", "i learned", "i acquired", "these studies",
                "my studies",
            ],
        },
    ),
    (
        "alignmentWithGoals",
        Connector {
            lead: "This scholarship aligns with my goals because",
            equivalents: &[
                "this scholarship aligns", "the scholarship aligns", "this aligns", "it aligns",
                "this opportunity", "this matches",
            ],
        },
    ),
    (
        "uniqueOffering",
        Connector {
            lead: "In return, I would bring",
            equivalents: &[
                "in return", "i bring", "i would bring", "i will bring", "i can offer", "i offer",
                "what i bring",
            ],
        },
    ),
    (
        "whyThisProgram",
        Connector {
            lead: "I chose this program because",
            equivalents: &["i chose", "i selected", "i picked", "this program", "the program"],
        },
    ),
    (
        "task",
        Connector {
            lead: "I was tasked with",
            equivalents: &[
                "i was tasked", "my task", "my role", "i was responsible", "i was asked",
                "i had to", "i was in charge",
            ],
        },
    ),
    (
        "action",
        Connector {
            lead: "To address this, I",
            equivalents: &[
                "to address", "to solve", "to tackle", "to fix", "i ", "i'", "we ", "first",
                "together",
            ],
        },
    ),
    (
        "result",
        Connector {
            lead: "As a result,",
            equivalents: &[
                "as a result", "consequently", "as a consequence", "the result", "this resulted",
                "in the end", "ultimately",
            ],
        },
    ),
    (
        "lessonsLearned",
        Connector {
            lead: "This experience taught me that",
            equivalents: &[
                "this experience taught", "the experience taught", "this taught", "it taught",
                "i learned", "i learnt", "from this",
            ],
        },
    ),
    (
        "shortTermGoals",
        Connector {
            lead: "After graduating, I plan to",
            equivalents: &[
                "after graduating", "after graduation", "after completing", "upon",
                "in the short term", "my short-term", "i plan", "i will", "i intend", "i aim",
                "immediately",
            ],
        },
    ),
    (
        "longTermGoals",
        Connector {
            lead: "In the long term, I aim to",
            equivalents: &[
                "in the long term", "in the long run", "long-term", "my long-term", "ultimately",
                "eventually", "i aim", "i hope", "i want", "i plan",
            ],
        },
    ),
    (
        "measurableOutcomes",
        Connector {
            lead: "I will measure my success by",
            equivalents: &[
                "i will measure", "my success", "success will", "concretely", "specifically",
            ],
        },
    ),
];

const TR_CONNECTORS: &[(&str, Connector)] = &[
    (
        "fieldOfInterest",
        Connector {
            lead: "Ilgi alanim:",
            equivalents: &["ilgi alanim", "ilgi alanım", "alanim", "alanım"],
        },
    ),
    (
        "careerGoal",
        Connector {
            lead: "Kariyer hedefim:",
            equivalents: &["kariyer hedefim", "hedefim", "amacim", "amacım"],
        },
    ),
    (
        "relevantCourses",
        Connector {
            lead: "Aldigim baslica dersler:",
            equivalents: &["aldigim", "aldığım", "dersler", "derslerim", "baslica", "başlıca"],
        },
    ),
    (
        "academicAchievements",
        Connector {
            lead: "Akademik basarilarim:",
            equivalents: &["akademik basari", "akademik başarı", "basarilarim", "başarılarım"],
        },
    ),
    (
        "skillsGained",
        Connector {
            lead: "Egitimim boyunca kazandigim beceriler:",
            equivalents: &["egitimim boyunca", "eğitimim boyunca", "kazandigim", "kazandığım"],
        },
    ),
    (
        "alignmentWithGoals",
        Connector {
            lead: "Bu burs hedeflerimle ortusuyor:",
            equivalents: &["bu burs", "hedeflerimle", "bu firsat", "bu fırsat"],
        },
    ),
    (
        "uniqueOffering",
        Connector {
            lead: "Buna karsilik katkim:",
            equivalents: &["buna karsilik", "buna karşılık", "katkim", "katkım"],
        },
    ),
    (
        "whyThisProgram",
        Connector {
            lead: "Bu programi secme nedenim:",
            equivalents: &["bu programi", "bu programı", "bu program"],
        },
    ),
    (
        "task",
        Connector {
            lead: "Gorevim:",
            equivalents: &["gorevim", "görevim", "sorumlulugum", "sorumluluğum"],
        },
    ),
    (
        "action",
        Connector {
            lead: "Bu dogrultuda:",
            equivalents: &["bu dogrultuda", "bu doğrultuda", "bunun icin", "bunun için", "bu amacla", "bu amaçla"],
        },
    ),
    (
        "result",
        Connector {
            lead: "Sonuc olarak,",
            equivalents: &["sonuc olarak", "sonuç olarak", "sonucta", "sonuçta", "bunun sonucunda"],
        },
    ),
    (
        "lessonsLearned",
        Connector {
            lead: "Bu deneyim bana sunu ogretti:",
            equivalents: &["bu deneyim", "ogrendim", "öğrendim"],
        },
    ),
    (
        "shortTermGoals",
        Connector {
            lead: "Mezuniyetimin ardindan kisa vadeli hedefim:",
            equivalents: &["mezuniyet", "kisa vade", "kısa vade"],
        },
    ),
    (
        "longTermGoals",
        Connector {
            lead: "Uzun vadede hedefim:",
            equivalents: &["uzun vade"],
        },
    ),
    (
        "measurableOutcomes",
        Connector {
            lead: "Basarimi su sekilde olcecegim:",
            equivalents: &["basarimi", "başarımı", "somut olarak"],
        },
    ),
];

static CONNECTORS: Lazy<HashMap<LetterLanguage, HashMap<&'static str, Connector>>> =
    Lazy::new(|| {
        HashMap::from([
            (LetterLanguage::En, EN_CONNECTORS.iter().copied().collect()),
            (LetterLanguage::Tr, TR_CONNECTORS.iter().copied().collect()),
        ])
    });

pub fn connector(language: LetterLanguage, field: &str) -> Option<&'static Connector> {
    CONNECTORS.get(&language).and_then(|by_field| by_field.get(field))
}

/// Renders one answer as a sentence of its paragraph. Returns `None` for
/// blank answers.
pub fn phrase_field(language: LetterLanguage, field: &str, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let sentence = match connector(language, field) {
        Some(connector) if !opens_with_equivalent(connector, text) => {
            let rest = strip_repeated_word(connector.lead, text);
            format!("{} {}", connector.lead, lower_first(rest))
        }
        _ => text.to_string(),
    };

    Some(ensure_terminal_punctuation(sentence))
}

fn opens_with_equivalent(connector: &Connector, text: &str) -> bool {
    let text_lower = text.to_lowercase();
    connector
        .equivalents
        .iter()
        .any(|eq| text_lower.starts_with(eq))
}

/// Drops a leading word that repeats the lead's last word ("…plan to" + "to join").
fn strip_repeated_word<'a>(lead: &str, text: &'a str) -> &'a str {
    let Some(last) = lead.split_whitespace().last() else {
        return text;
    };
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) if first.eq_ignore_ascii_case(last) => rest.trim_start(),
        _ => text,
    }
}

/// Lowercases the first letter unless the first word is "I" or an acronym.
fn lower_first(text: &str) -> String {
    let first_word = text.split_whitespace().next().unwrap_or("");
    let is_pronoun = first_word == "I" || first_word.starts_with("I'");
    let is_acronym = first_word.chars().take(2).filter(|c| c.is_uppercase()).count() == 2;
    if is_pronoun || is_acronym {
        return text.to_string();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ensure_terminal_punctuation(mut sentence: String) -> String {
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}

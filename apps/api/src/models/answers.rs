//! Answer Set: the structured draft the wizard edits field by field.
//!
//! Wire format is the serialized record the draft-persistence layer stores:
//! camelCase keys, every field optional on input (missing → empty string).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HookSection {
    pub opening_statement: String,
    pub field_of_interest: String,
    pub career_goal: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcademicSection {
    pub current_education: String,
    pub relevant_courses: String,
    pub academic_achievements: String,
    pub skills_gained: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhyScholarshipSection {
    pub what_attracted: String,
    pub alignment_with_goals: String,
    pub unique_offering: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhyTurkeySection {
    pub country_reasons: String,
    pub university_name: String,
    pub program_name: String,
    pub why_this_program: String,
    pub specific_details: String,
}

/// STAR-format leadership story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadershipSection {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub lessons_learned: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FutureSection {
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub impact_on_community: String,
    pub measurable_outcomes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClosingSection {
    pub commitment: String,
    pub gratitude: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    #[default]
    Balanced,
    Personal,
}

/// Letter language. `Ar` is accepted on input but has no letter copy of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Tr,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Ar => "ar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub full_name: String,
    pub tone: Tone,
    pub language: Language,
    /// Informational only; nothing here enforces it.
    pub target_word_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            tone: Tone::default(),
            language: Language::default(),
            target_word_count: 750,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerSet {
    pub hook: HookSection,
    pub academic: AcademicSection,
    pub why_scholarship: WhyScholarshipSection,
    pub why_turkey: WhyTurkeySection,
    pub leadership: LeadershipSection,
    pub future: FutureSection,
    pub closing: ClosingSection,
    pub settings: Settings,
}

/// The seven wizard sections, in step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LetterSection {
    Hook,
    Academic,
    WhyScholarship,
    WhyTurkey,
    Leadership,
    Future,
    Closing,
}

impl LetterSection {
    pub const ALL: [LetterSection; 7] = [
        LetterSection::Hook,
        LetterSection::Academic,
        LetterSection::WhyScholarship,
        LetterSection::WhyTurkey,
        LetterSection::Leadership,
        LetterSection::Future,
        LetterSection::Closing,
    ];

    pub fn from_step(step: usize) -> Option<Self> {
        Self::ALL.get(step).copied()
    }

    pub fn step(&self) -> usize {
        match self {
            LetterSection::Hook => 0,
            LetterSection::Academic => 1,
            LetterSection::WhyScholarship => 2,
            LetterSection::WhyTurkey => 3,
            LetterSection::Leadership => 4,
            LetterSection::Future => 5,
            LetterSection::Closing => 6,
        }
    }

    /// English label shown in the preview highlighter.
    pub fn label(&self) -> &'static str {
        match self {
            LetterSection::Hook => "Hook",
            LetterSection::Academic => "Academic",
            LetterSection::WhyScholarship => "Why Scholarship",
            LetterSection::WhyTurkey => "Why Turkey",
            LetterSection::Leadership => "Leadership",
            LetterSection::Future => "Future Plan",
            LetterSection::Closing => "Closing",
        }
    }

    /// Key used in dotted field paths (`whyTurkey.universityName`).
    pub fn key(&self) -> &'static str {
        match self {
            LetterSection::Hook => "hook",
            LetterSection::Academic => "academic",
            LetterSection::WhyScholarship => "whyScholarship",
            LetterSection::WhyTurkey => "whyTurkey",
            LetterSection::Leadership => "leadership",
            LetterSection::Future => "future",
            LetterSection::Closing => "closing",
        }
    }

    /// The single field that decides whether the section shows as missing.
    pub fn anchor_field(&self) -> &'static str {
        match self {
            LetterSection::Hook => "openingStatement",
            LetterSection::Academic => "currentEducation",
            LetterSection::WhyScholarship => "whatAttracted",
            LetterSection::WhyTurkey => "universityName",
            LetterSection::Leadership => "situation",
            LetterSection::Future => "shortTermGoals",
            LetterSection::Closing => "commitment",
        }
    }

    /// `(fieldName, value)` pairs in declaration order.
    pub fn fields<'a>(&self, answers: &'a AnswerSet) -> Vec<(&'static str, &'a str)> {
        match self {
            LetterSection::Hook => {
                let s = &answers.hook;
                vec![
                    ("openingStatement", s.opening_statement.as_str()),
                    ("fieldOfInterest", s.field_of_interest.as_str()),
                    ("careerGoal", s.career_goal.as_str()),
                ]
            }
            LetterSection::Academic => {
                let s = &answers.academic;
                vec![
                    ("currentEducation", s.current_education.as_str()),
                    ("relevantCourses", s.relevant_courses.as_str()),
                    ("academicAchievements", s.academic_achievements.as_str()),
                    ("skillsGained", s.skills_gained.as_str()),
                ]
            }
            LetterSection::WhyScholarship => {
                let s = &answers.why_scholarship;
                vec![
                    ("whatAttracted", s.what_attracted.as_str()),
                    ("alignmentWithGoals", s.alignment_with_goals.as_str()),
                    ("uniqueOffering", s.unique_offering.as_str()),
                ]
            }
            LetterSection::WhyTurkey => {
                let s = &answers.why_turkey;
                vec![
                    ("countryReasons", s.country_reasons.as_str()),
                    ("universityName", s.university_name.as_str()),
                    ("programName", s.program_name.as_str()),
                    ("whyThisProgram", s.why_this_program.as_str()),
                    ("specificDetails", s.specific_details.as_str()),
                ]
            }
            LetterSection::Leadership => {
                let s = &answers.leadership;
                vec![
                    ("situation", s.situation.as_str()),
                    ("task", s.task.as_str()),
                    ("action", s.action.as_str()),
                    ("result", s.result.as_str()),
                    ("lessonsLearned", s.lessons_learned.as_str()),
                ]
            }
            LetterSection::Future => {
                let s = &answers.future;
                vec![
                    ("shortTermGoals", s.short_term_goals.as_str()),
                    ("longTermGoals", s.long_term_goals.as_str()),
                    ("impactOnCommunity", s.impact_on_community.as_str()),
                    ("measurableOutcomes", s.measurable_outcomes.as_str()),
                ]
            }
            LetterSection::Closing => {
                let s = &answers.closing;
                vec![
                    ("commitment", s.commitment.as_str()),
                    ("gratitude", s.gratitude.as_str()),
                ]
            }
        }
    }

    pub fn field<'a>(&self, answers: &'a AnswerSet, name: &str) -> Option<&'a str> {
        self.fields(answers)
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

impl AnswerSet {
    /// Resolves a dotted path such as `hook.careerGoal` or `settings.fullName`.
    pub fn value_of(&self, path: &str) -> Option<&str> {
        let (section_key, field) = path.split_once('.')?;
        if section_key == "settings" {
            return match field {
                "fullName" => Some(self.settings.full_name.as_str()),
                _ => None,
            };
        }
        LetterSection::ALL
            .iter()
            .find(|s| s.key() == section_key)
            .and_then(|s| s.field(self, field))
    }

    /// Every free-text field of the seven sections, joined by single spaces.
    pub fn all_text(&self) -> String {
        LetterSection::ALL
            .iter()
            .flat_map(|s| s.fields(self).into_iter().map(|(_, v)| v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

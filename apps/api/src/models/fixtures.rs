//! Shared answer-set builders for unit tests.

use crate::models::answers::{AnswerSet, LetterSection, Tone};

pub fn field_mut<'a>(a: &'a mut AnswerSet, path: &str) -> &'a mut String {
    match path {
        "hook.openingStatement" => &mut a.hook.opening_statement,
        "hook.fieldOfInterest" => &mut a.hook.field_of_interest,
        "hook.careerGoal" => &mut a.hook.career_goal,
        "academic.currentEducation" => &mut a.academic.current_education,
        "academic.relevantCourses" => &mut a.academic.relevant_courses,
        "academic.academicAchievements" => &mut a.academic.academic_achievements,
        "academic.skillsGained" => &mut a.academic.skills_gained,
        "whyScholarship.whatAttracted" => &mut a.why_scholarship.what_attracted,
        "whyScholarship.alignmentWithGoals" => &mut a.why_scholarship.alignment_with_goals,
        "whyScholarship.uniqueOffering" => &mut a.why_scholarship.unique_offering,
        "whyTurkey.countryReasons" => &mut a.why_turkey.country_reasons,
        "whyTurkey.universityName" => &mut a.why_turkey.university_name,
        "whyTurkey.programName" => &mut a.why_turkey.program_name,
        "whyTurkey.whyThisProgram" => &mut a.why_turkey.why_this_program,
        "whyTurkey.specificDetails" => &mut a.why_turkey.specific_details,
        "leadership.situation" => &mut a.leadership.situation,
        "leadership.task" => &mut a.leadership.task,
        "leadership.action" => &mut a.leadership.action,
        "leadership.result" => &mut a.leadership.result,
        "leadership.lessonsLearned" => &mut a.leadership.lessons_learned,
        "future.shortTermGoals" => &mut a.future.short_term_goals,
        "future.longTermGoals" => &mut a.future.long_term_goals,
        "future.impactOnCommunity" => &mut a.future.impact_on_community,
        "future.measurableOutcomes" => &mut a.future.measurable_outcomes,
        "closing.commitment" => &mut a.closing.commitment,
        "closing.gratitude" => &mut a.closing.gratitude,
        "settings.fullName" => &mut a.settings.full_name,
        _ => panic!("unknown field path {path}"),
    }
}

pub fn set(a: &mut AnswerSet, path: &str, value: &str) {
    *field_mut(a, path) = value.to_string();
}

/// Every dotted path of the seven sections, in declaration order.
pub fn all_field_paths() -> Vec<String> {
    let empty = AnswerSet::default();
    LetterSection::ALL
        .iter()
        .flat_map(|s| {
            s.fields(&empty)
                .into_iter()
                .map(move |(field, _)| format!("{}.{}", s.key(), field))
        })
        .collect()
}

pub fn fill_all(a: &mut AnswerSet, value: &str) {
    for path in all_field_paths() {
        set(a, &path, value);
    }
}

/// A complete, cliché-free draft.
pub fn complete_answers() -> AnswerSet {
    let mut a = AnswerSet::default();
    set(&mut a, "hook.openingStatement", "In 2019 a flood cut power to my town in Kano for 3 weeks, and I rebuilt our school's solar charger from spare parts.");
    set(&mut a, "hook.fieldOfInterest", "renewable energy systems");
    set(&mut a, "hook.careerGoal", "design affordable off-grid power for rural clinics in Nigeria.");
    set(&mut a, "academic.currentEducation", "I am a final-year electrical engineering student at Bayero University Kano with a GPA of 4.6/5.0.");
    set(&mut a, "academic.relevantCourses", "signals and systems, Power Electronics and Control Theory.");
    set(&mut a, "academic.academicAchievements", "a 2nd-place ranking out of 180 students in my department in 2023.");
    set(&mut a, "academic.skillsGained", "circuit simulation in MATLAB and field measurement of solar arrays.");
    set(&mut a, "whyScholarship.whatAttracted", "The scholarship covers full tuition and a year of Turkish language study, which lets me focus on research.");
    set(&mut a, "whyScholarship.alignmentWithGoals", "its focus on developing engineers who return to serve their regions matches my plan.");
    set(&mut a, "whyScholarship.uniqueOffering", "field experience installing 14 solar kits in Kano State.");
    set(&mut a, "whyTurkey.countryReasons", "Turkiye has grown its solar capacity quickly and shares many climate conditions with northern Nigeria.");
    set(&mut a, "whyTurkey.universityName", "Middle East Technical University");
    set(&mut a, "whyTurkey.programName", "MSc in Electrical and Electronics Engineering");
    set(&mut a, "whyTurkey.whyThisProgram", "its power systems laboratory runs microgrid experiments that I can join in my first year.");
    set(&mut a, "whyTurkey.specificDetails", "I hope to work with the Center for Solar Energy Research and Applications.");
    set(&mut a, "leadership.situation", "In 2022 our engineering society had 12 active members and no funding.");
    set(&mut a, "leadership.task", "rebuilding membership and securing a sponsor before the national robotics contest.");
    set(&mut a, "leadership.action", "organized weekly build nights and pitched to 5 local businesses.");
    set(&mut a, "leadership.result", "membership grew to 45 students and we won 3rd place nationally.");
    set(&mut a, "leadership.lessonsLearned", "clear weekly goals keep volunteers engaged.");
    set(&mut a, "future.shortTermGoals", "join a utility-scale solar developer in Nigeria within 2 years of graduating.");
    set(&mut a, "future.longTermGoals", "found a company that installs microgrids for 50 rural clinics.");
    set(&mut a, "future.impactOnCommunity", "Reliable power would let clinics in my region store vaccines safely.");
    set(&mut a, "future.measurableOutcomes", "cutting diesel costs for partner clinics by 40% by 2032.");
    set(&mut a, "closing.commitment", "I will complete the program on schedule and bring its methods back home.");
    set(&mut a, "closing.gratitude", "Thank you for considering my application.");
    a.settings.full_name = "Ahmed Ibrahim".to_string();
    a.settings.tone = Tone::Balanced;
    a
}

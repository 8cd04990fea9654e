//! Transition sentences keyed tone → language → section.
//!
//! The Hook paragraph opens the letter and never gets a transition.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::letter::locale::LetterLanguage;
use crate::models::answers::{LetterSection, Tone};

type SectionCopy = [(LetterSection, &'static str); 6];

const TRANSITION_COPY: &[(Tone, LetterLanguage, SectionCopy)] = &[
    (
        Tone::Formal,
        LetterLanguage::En,
        [
            (LetterSection::Academic, "My academic background has thoroughly prepared me for this opportunity."),
            (LetterSection::WhyScholarship, "The Turkiye Scholarships program represents an ideal platform for my continued development."),
            (LetterSection::WhyTurkey, "Turkiye offers an academic environment uniquely suited to my objectives."),
            (LetterSection::Leadership, "Beyond academics, I have demonstrated leadership in practical settings."),
            (LetterSection::Future, "Upon completion of my studies, I have a clear plan for applying my education."),
            (LetterSection::Closing, "In conclusion, I am fully committed to making the most of this opportunity."),
        ],
    ),
    (
        Tone::Balanced,
        LetterLanguage::En,
        [
            (LetterSection::Academic, "My studies so far have given me a solid foundation for this next step."),
            (LetterSection::WhyScholarship, "This scholarship stands out to me for several reasons."),
            (LetterSection::WhyTurkey, "Studying in Turkiye is a deliberate choice for me."),
            (LetterSection::Leadership, "Outside the classroom, I have also taken on leadership responsibilities."),
            (LetterSection::Future, "Looking ahead, I have concrete plans for how I will use what I learn."),
            (LetterSection::Closing, "To conclude, I am ready to commit fully to this opportunity."),
        ],
    ),
    (
        Tone::Personal,
        LetterLanguage::En,
        [
            (LetterSection::Academic, "Everything I have studied so far has led me to this point."),
            (LetterSection::WhyScholarship, "When I learned about this scholarship, I knew it was the right fit for me."),
            (LetterSection::WhyTurkey, "Turkiye has a special place in my plans, and here is why."),
            (LetterSection::Leadership, "Some of my most meaningful growth has come from leading others."),
            (LetterSection::Future, "When I think about the years after graduation, I see clear and concrete steps."),
            (LetterSection::Closing, "Finally, I want you to know how seriously I take this opportunity."),
        ],
    ),
    (
        Tone::Formal,
        LetterLanguage::Tr,
        [
            (LetterSection::Academic, "Akademik gecmisim beni bu firsata kapsamli bicimde hazirlamistir."),
            (LetterSection::WhyScholarship, "Turkiye Burslari programi, gelisimimi surdurmem icin ideal bir platform sunmaktadir."),
            (LetterSection::WhyTurkey, "Turkiye, hedeflerime son derece uygun bir akademik ortam sunmaktadir."),
            (LetterSection::Leadership, "Akademik calismalarimin yani sira, uygulamada liderlik sorumluluklari ustlendim."),
            (LetterSection::Future, "Egitimimi tamamladiktan sonra, edindigim bilgileri nasil kullanacagima dair net bir planim bulunmaktadir."),
            (LetterSection::Closing, "Sonuc olarak, bu firsati en iyi sekilde degerlendirmeye tamamen kararliyim."),
        ],
    ),
    (
        Tone::Balanced,
        LetterLanguage::Tr,
        [
            (LetterSection::Academic, "Bugune kadarki egitimim bu adim icin saglam bir temel olusturdu."),
            (LetterSection::WhyScholarship, "Bu burs benim icin birkac nedenle one cikiyor."),
            (LetterSection::WhyTurkey, "Turkiye'de okumak benim icin bilincli bir tercih."),
            (LetterSection::Leadership, "Sinif disinda da liderlik sorumluluklari ustlendim."),
            (LetterSection::Future, "Ileriye baktigimda, ogrendiklerimi nasil kullanacagima dair somut planlarim var."),
            (LetterSection::Closing, "Son olarak, bu firsata tum emegimle baglanmaya hazirim."),
        ],
    ),
    (
        Tone::Personal,
        LetterLanguage::Tr,
        [
            (LetterSection::Academic, "Bugune kadar ogrendigim her sey beni bu noktaya getirdi."),
            (LetterSection::WhyScholarship, "Bu bursu ilk duydugumda, benim icin dogru yer oldugunu hissettim."),
            (LetterSection::WhyTurkey, "Turkiye, planlarimda ozel bir yere sahip ve nedenini anlatmak isterim."),
            (LetterSection::Leadership, "En anlamli gelisimimi baskalarina liderlik ederken yasadim."),
            (LetterSection::Future, "Mezuniyet sonrasini dusundugumde, net ve somut adimlar goruyorum."),
            (LetterSection::Closing, "Son olarak, bu firsati ne kadar ciddiye aldigimi bilmenizi isterim."),
        ],
    ),
];

type TransitionTable = HashMap<Tone, HashMap<LetterLanguage, HashMap<LetterSection, &'static str>>>;

static TRANSITIONS: Lazy<TransitionTable> = Lazy::new(|| {
    let mut table: TransitionTable = HashMap::new();
    for (tone, language, sections) in TRANSITION_COPY {
        table
            .entry(*tone)
            .or_default()
            .insert(*language, sections.iter().copied().collect());
    }
    table
});

/// Sentence that leads into `section`, or `None` for the Hook.
pub fn transition(tone: Tone, language: LetterLanguage, section: LetterSection) -> Option<&'static str> {
    TRANSITIONS
        .get(&tone)
        .and_then(|by_language| by_language.get(&language))
        .and_then(|by_section| by_section.get(&section))
        .copied()
}

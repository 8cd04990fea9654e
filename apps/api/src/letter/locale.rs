//! Fixed letter copy per language: salutation, sign-off, name placeholder.

use crate::models::answers::Language;

/// Languages the letter has copy for. Any other setting renders in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterLanguage {
    En,
    Tr,
}

impl From<Language> for LetterLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::Tr => LetterLanguage::Tr,
            Language::En | Language::Ar => LetterLanguage::En,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleCopy {
    pub salutation: &'static str,
    pub sign_off: &'static str,
    pub name_placeholder: &'static str,
}

const EN_COPY: LocaleCopy = LocaleCopy {
    salutation: "Dear Turkiye Scholarships Selection Committee,",
    sign_off: "Sincerely,",
    name_placeholder: "[Your Name]",
};

const TR_COPY: LocaleCopy = LocaleCopy {
    salutation: "Sayin Turkiye Burslari Secim Komitesi,",
    sign_off: "Saygilarimla,",
    name_placeholder: "[Adiniz]",
};

pub fn locale_copy(language: LetterLanguage) -> LocaleCopy {
    match language {
        LetterLanguage::En => EN_COPY,
        LetterLanguage::Tr => TR_COPY,
    }
}

/// Sentence naming the target program, opening the Why Turkey paragraph.
/// Either name alone still gets a sentence; `None` when both are blank.
pub fn applying_sentence(
    language: LetterLanguage,
    university: &str,
    program: &str,
) -> Option<String> {
    let (university, program) = (university.trim(), program.trim());
    let sentence = match (language, university.is_empty(), program.is_empty()) {
        (_, true, true) => return None,
        (LetterLanguage::En, false, false) => {
            format!("I am applying to the {program} program at {university}.")
        }
        (LetterLanguage::En, false, true) => format!("I am applying to {university}."),
        (LetterLanguage::En, true, false) => format!("I am applying to the {program} program."),
        (LetterLanguage::Tr, false, false) => {
            format!("{university} {program} programina basvuruyorum.")
        }
        (LetterLanguage::Tr, false, true) => format!("Basvurdugum universite: {university}."),
        (LetterLanguage::Tr, true, false) => format!("Basvurdugum program: {program}."),
    };
    Some(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_falls_back_to_english_copy() {
        assert_eq!(LetterLanguage::from(Language::Ar), LetterLanguage::En);
        assert_eq!(LetterLanguage::from(Language::Tr), LetterLanguage::Tr);
    }

    #[test]
    fn test_applying_sentence_names_both() {
        let s = applying_sentence(LetterLanguage::En, "Bogazici University", "MA in History");
        assert_eq!(
            s.as_deref(),
            Some("I am applying to the MA in History program at Bogazici University.")
        );
        let s = applying_sentence(LetterLanguage::Tr, "Bogazici Universitesi", "Tarih").unwrap();
        assert!(s.starts_with("Bogazici Universitesi Tarih"));
    }

    #[test]
    fn test_applying_sentence_with_one_name() {
        assert_eq!(
            applying_sentence(LetterLanguage::En, "Ankara University", " ").as_deref(),
            Some("I am applying to Ankara University.")
        );
        assert_eq!(
            applying_sentence(LetterLanguage::En, "", "BSc in Physics").as_deref(),
            Some("I am applying to the BSc in Physics program.")
        );
        assert_eq!(
            applying_sentence(LetterLanguage::Tr, "Ankara Universitesi", "").as_deref(),
            Some("Basvurdugum universite: Ankara Universitesi.")
        );
        assert_eq!(applying_sentence(LetterLanguage::En, "  ", ""), None);
    }
}

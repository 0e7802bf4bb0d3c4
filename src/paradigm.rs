use serde::Serialize;

use crate::forms::VerbForms;

/// The twelve English tenses, in display order: present, past and future
/// groups, each running simple, continuous, perfect, perfect continuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tense {
    SimplePresent,
    PresentContinuous,
    PresentPerfect,
    PresentPerfectContinuous,
    SimplePast,
    PastContinuous,
    PastPerfect,
    PastPerfectContinuous,
    SimpleFuture,
    FutureContinuous,
    FuturePerfect,
    FuturePerfectContinuous,
}

impl Tense {
    pub const ALL: [Tense; 12] = [
        Tense::SimplePresent,
        Tense::PresentContinuous,
        Tense::PresentPerfect,
        Tense::PresentPerfectContinuous,
        Tense::SimplePast,
        Tense::PastContinuous,
        Tense::PastPerfect,
        Tense::PastPerfectContinuous,
        Tense::SimpleFuture,
        Tense::FutureContinuous,
        Tense::FuturePerfect,
        Tense::FuturePerfectContinuous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tense::SimplePresent => "Simple Present",
            Tense::PresentContinuous => "Present Continuous",
            Tense::PresentPerfect => "Present Perfect",
            Tense::PresentPerfectContinuous => "Present Perfect Continuous",
            Tense::SimplePast => "Simple Past",
            Tense::PastContinuous => "Past Continuous",
            Tense::PastPerfect => "Past Perfect",
            Tense::PastPerfectContinuous => "Past Perfect Continuous",
            Tense::SimpleFuture => "Simple Future",
            Tense::FutureContinuous => "Future Continuous",
            Tense::FuturePerfect => "Future Perfect",
            Tense::FuturePerfectContinuous => "Future Perfect Continuous",
        }
    }

    pub fn structure(&self) -> &'static str {
        match self {
            Tense::SimplePresent => "I/You/We/They + base form | He/She/It + -s/-es",
            Tense::PresentContinuous => "am/is/are + -ing",
            Tense::PresentPerfect => "have/has + past participle",
            Tense::PresentPerfectContinuous => "have/has been + -ing",
            Tense::SimplePast => "past form",
            Tense::PastContinuous => "was/were + -ing",
            Tense::PastPerfect => "had + past participle",
            Tense::PastPerfectContinuous => "had been + -ing",
            Tense::SimpleFuture => "will + base form",
            Tense::FutureContinuous => "will be + -ing",
            Tense::FuturePerfect => "will have + past participle",
            Tense::FuturePerfectContinuous => "will have been + -ing",
        }
    }

    /// Portuguese gloss shown under the example.
    pub fn translation_note(&self) -> &'static str {
        match self {
            Tense::SimplePresent => "Presente simples - ações habituais",
            Tense::PresentContinuous => "Presente contínuo - ações em progresso",
            Tense::PresentPerfect => {
                "Presente perfeito - ações concluídas com relevância presente"
            }
            Tense::PresentPerfectContinuous => {
                "Presente perfeito contínuo - ações que começaram no passado e continuam"
            }
            Tense::SimplePast => "Passado simples - ações concluídas no passado",
            Tense::PastContinuous => "Passado contínuo - ações em progresso no passado",
            Tense::PastPerfect => "Passado perfeito - ações anteriores a outras no passado",
            Tense::PastPerfectContinuous => {
                "Passado perfeito contínuo - ações contínuas anteriores a outras no passado"
            }
            Tense::SimpleFuture => "Futuro simples - ações futuras",
            Tense::FutureContinuous => "Futuro contínuo - ações em progresso no futuro",
            Tense::FuturePerfect => "Futuro perfeito - ações que estarão concluídas no futuro",
            Tense::FuturePerfectContinuous => {
                "Futuro perfeito contínuo - ações contínuas até um ponto no futuro"
            }
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Tense::SimplePresent)
    }

    pub fn example(&self, forms: &VerbForms) -> String {
        match self {
            Tense::SimplePresent => {
                format!("I {} / He {}", forms.infinitive, forms.third_person_singular)
            }
            Tense::PresentContinuous => format!("I am {}", forms.present_participle),
            Tense::PresentPerfect => format!("I have {}", forms.past_participle),
            Tense::PresentPerfectContinuous => format!("I have been {}", forms.present_participle),
            Tense::SimplePast => format!("I {}", forms.past_simple),
            Tense::PastContinuous => format!("I was {}", forms.present_participle),
            Tense::PastPerfect => format!("I had {}", forms.past_participle),
            Tense::PastPerfectContinuous => format!("I had been {}", forms.present_participle),
            Tense::SimpleFuture => format!("I will {}", forms.infinitive),
            Tense::FutureContinuous => format!("I will be {}", forms.present_participle),
            Tense::FuturePerfect => format!("I will have {}", forms.past_participle),
            Tense::FuturePerfectContinuous => {
                format!("I will have been {}", forms.present_participle)
            }
        }
    }

    pub fn entry(&self, forms: &VerbForms) -> TenseEntry {
        TenseEntry {
            tense: *self,
            tense_name: self.name(),
            structure_template: self.structure(),
            example_sentence: self.example(forms),
            translation_note: self.translation_note(),
            highlighted: self.is_highlighted(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenseEntry {
    pub tense: Tense,
    pub tense_name: &'static str,
    pub structure_template: &'static str,
    pub example_sentence: String,
    pub translation_note: &'static str,
    pub highlighted: bool,
}

/// Expand fully derived forms into the twelve tense entries.
///
/// `forms` must be complete; an empty field is a caller bug and trips a
/// debug assertion.
pub fn generate_tense_paradigm(forms: &VerbForms) -> [TenseEntry; 12] {
    debug_assert!(
        forms.is_complete(),
        "paradigm requested for incomplete forms of '{}': {:?} is empty",
        forms.infinitive,
        forms.missing_field()
    );
    Tense::ALL.map(|tense| tense.entry(forms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Category;
    use crate::submission::derive_forms;

    fn go() -> VerbForms {
        derive_forms("go", "went", "gone", "ir", Category::Irregular, None, None, None).unwrap()
    }

    #[test]
    fn test_paradigm_order_and_highlight() {
        let paradigm = generate_tense_paradigm(&go());
        let names: Vec<&str> = paradigm.iter().map(|e| e.tense_name).collect();
        assert_eq!(
            names,
            vec![
                "Simple Present",
                "Present Continuous",
                "Present Perfect",
                "Present Perfect Continuous",
                "Simple Past",
                "Past Continuous",
                "Past Perfect",
                "Past Perfect Continuous",
                "Simple Future",
                "Future Continuous",
                "Future Perfect",
                "Future Perfect Continuous",
            ]
        );

        let highlighted: Vec<Tense> = paradigm
            .iter()
            .filter(|e| e.highlighted)
            .map(|e| e.tense)
            .collect();
        assert_eq!(highlighted, vec![Tense::SimplePresent]);
    }

    #[test]
    fn test_paradigm_examples() {
        let paradigm = generate_tense_paradigm(&go());
        let examples: Vec<&str> = paradigm.iter().map(|e| e.example_sentence.as_str()).collect();
        assert_eq!(
            examples,
            vec![
                "I go / He goes",
                "I am going",
                "I have gone",
                "I have been going",
                "I went",
                "I was going",
                "I had gone",
                "I had been going",
                "I will go",
                "I will be going",
                "I will have gone",
                "I will have been going",
            ]
        );
    }

    #[test]
    fn test_notes_do_not_depend_on_verb() {
        let like = derive_forms("like", "liked", "liked", "gostar", Category::Regular, None, None, None)
            .unwrap();
        let a = generate_tense_paradigm(&go());
        let b = generate_tense_paradigm(&like);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.translation_note, y.translation_note);
            assert_eq!(x.structure_template, y.structure_template);
            assert!(!x.translation_note.is_empty());
        }
        assert_eq!(a[0].structure_template, "I/You/We/They + base form | He/She/It + -s/-es");
    }

    #[test]
    fn test_entry_serializes_for_display() {
        let entry = Tense::PastPerfect.entry(&go());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["tenseName"], "Past Perfect");
        assert_eq!(json["exampleSentence"], "I had gone");
        assert_eq!(json["highlighted"], false);
    }
}

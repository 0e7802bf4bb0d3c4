use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Regular,
    #[default]
    Irregular,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Regular => "regular",
            Category::Irregular => "irregular",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Category::Regular),
            "irregular" => Ok(Category::Irregular),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Names of the user-facing and derived fields of a verb, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Infinitive,
    Translation,
    Category,
    PastSimple,
    PastParticiple,
    PresentParticiple,
    Gerund,
    ThirdPersonSingular,
    SimplePresent,
    PresentContinuous,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Infinitive => "infinitive",
            FormField::Translation => "translation",
            FormField::Category => "category",
            FormField::PastSimple => "pastSimple",
            FormField::PastParticiple => "pastParticiple",
            FormField::PresentParticiple => "presentParticiple",
            FormField::Gerund => "gerund",
            FormField::ThirdPersonSingular => "thirdPersonSingular",
            FormField::SimplePresent => "simplePresent",
            FormField::PresentContinuous => "presentContinuous",
        }
    }

    /// Label shown next to the input box.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Infinitive => "Infinitive",
            FormField::Translation => "Translation",
            FormField::Category => "Category",
            FormField::PastSimple => "Past Simple",
            FormField::PastParticiple => "Past Participle",
            FormField::PresentParticiple => "Present Participle",
            FormField::Gerund => "Gerund",
            FormField::ThirdPersonSingular => "Third Person Singular",
            FormField::SimplePresent => "Simple Present",
            FormField::PresentContinuous => "Present Continuous",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fully derived conjugation of one verb.
///
/// Every field is non-empty once built through [`crate::derive_forms`] or
/// loaded by [`crate::Catalogue`]; `gerund` always equals
/// `present_participle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbForms {
    pub infinitive: String,
    pub past_simple: String,
    pub past_participle: String,
    pub present_participle: String,
    pub gerund: String,
    pub third_person_singular: String,
    pub present_continuous: String,
    pub simple_present: String,
}

impl VerbForms {
    pub fn missing_field(&self) -> Option<FormField> {
        [
            (FormField::Infinitive, &self.infinitive),
            (FormField::PastSimple, &self.past_simple),
            (FormField::PastParticiple, &self.past_participle),
            (FormField::PresentParticiple, &self.present_participle),
            (FormField::Gerund, &self.gerund),
            (FormField::ThirdPersonSingular, &self.third_person_singular),
            (FormField::PresentContinuous, &self.present_continuous),
            (FormField::SimplePresent, &self.simple_present),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct VerbRecord {
    pub id: String,
    pub infinitive: String,
    pub translation: String,
    pub category: Category,
    pub conjugation: VerbForms,
}

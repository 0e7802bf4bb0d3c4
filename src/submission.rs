//! The add-verb workflow: validate user input, fill in the missing inflected
//! forms and build a [`VerbRecord`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::forms::{Category, FormField, VerbForms, VerbRecord};
use crate::{inflection, overrides};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Stable record id for an infinitive: trimmed, lowercased, whitespace runs
/// replaced by "-" ("Give Up" -> "give-up").
pub fn verb_id(infinitive: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&infinitive.trim().to_lowercase(), "-")
        .into_owned()
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn supplied(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}

/// Build the full conjugation of a verb from its principal forms.
///
/// `infinitive`, `past_simple`, `past_participle` and `translation` are
/// required; the optional forms are derived when `None` (or blank). A
/// supplied present participle wins over a supplied gerund; the gerund of
/// the result always equals its present participle. The category does not
/// influence any derived form.
#[allow(clippy::too_many_arguments)]
pub fn derive_forms(
    infinitive: &str,
    past_simple: &str,
    past_participle: &str,
    translation: &str,
    _category: Category,
    present_participle: Option<&str>,
    third_person_singular: Option<&str>,
    gerund: Option<&str>,
) -> Result<VerbForms, ValidationError> {
    let mut errors = ValidationError::new();
    for (field, value) in [
        (FormField::Infinitive, infinitive),
        (FormField::Translation, translation),
        (FormField::PastSimple, past_simple),
        (FormField::PastParticiple, past_participle),
    ] {
        if value.trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let infinitive = normalize(infinitive);
    let supplied_participle = supplied(present_participle);
    let supplied_gerund = supplied(gerund);

    if let (Some(participle), Some(gerund)) = (&supplied_participle, &supplied_gerund) {
        if participle != gerund {
            tracing::warn!(
                infinitive = %infinitive,
                participle = %participle,
                gerund = %gerund,
                "gerund differs from present participle; keeping the participle"
            );
        }
    }

    let present_participle = supplied_participle
        .or(supplied_gerund)
        .or_else(|| overrides::present_participle(&infinitive).map(str::to_string))
        .unwrap_or_else(|| inflection::derive_present_participle(&infinitive));

    let third_person_singular = supplied(third_person_singular).unwrap_or_else(|| {
        overrides::third_person_singular(&infinitive)
            .map(str::to_string)
            .unwrap_or_else(|| inflection::derive_third_person_singular(&infinitive))
    });

    tracing::debug!(
        infinitive = %infinitive,
        present_participle = %present_participle,
        third_person_singular = %third_person_singular,
        "derived verb forms"
    );

    Ok(VerbForms {
        simple_present: overrides::simple_present(&infinitive, &third_person_singular),
        present_continuous: format!("am/is/are {}", present_participle),
        gerund: inflection::derive_gerund(&present_participle),
        present_participle,
        third_person_singular,
        past_simple: normalize(past_simple),
        past_participle: normalize(past_participle),
        infinitive,
    })
}

/// Raw add-verb form state. Empty optional boxes mean "auto-generate".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerbSubmission {
    pub infinitive: String,
    pub translation: String,
    pub category: String,
    pub past_simple: String,
    pub past_participle: String,
    pub present_participle: String,
    pub gerund: String,
    pub third_person_singular: String,
}

impl VerbSubmission {
    fn optional(value: &str) -> Option<&str> {
        if value.trim().is_empty() { None } else { Some(value) }
    }

    fn category(&self) -> Result<Category, String> {
        if self.category.trim().is_empty() {
            Ok(Category::default())
        } else {
            self.category.parse()
        }
    }

    /// Check the submission without building anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.build_record().map(|_| ())
    }

    pub fn build_record(&self) -> Result<VerbRecord, ValidationError> {
        let category = self.category();
        let forms = derive_forms(
            &self.infinitive,
            &self.past_simple,
            &self.past_participle,
            &self.translation,
            category.as_ref().copied().unwrap_or_default(),
            Self::optional(&self.present_participle),
            Self::optional(&self.third_person_singular),
            Self::optional(&self.gerund),
        );

        let (forms, category) = match (forms, category) {
            (Ok(forms), Ok(category)) => (forms, category),
            (forms, category) => {
                let mut errors = forms.err().unwrap_or_default();
                if let Err(msg) = category {
                    errors.insert(FormField::Category, msg);
                }
                return Err(errors);
            }
        };

        Ok(VerbRecord {
            id: verb_id(&self.infinitive),
            infinitive: forms.infinitive.clone(),
            translation: self.translation.trim().to_string(),
            category,
            conjugation: forms,
        })
    }
}

pub mod error;
pub mod config;
pub mod forms;
pub mod inflection;
pub mod overrides;
pub mod submission;
pub mod paradigm;
pub mod data;
pub mod catalogue;
pub mod favorites;
pub mod narration;

pub use catalogue::{Catalogue, VerbList};
pub use config::Config;
pub use error::{Error, Result, SpeechError, ValidationError};
pub use favorites::{Favorites, FileStorage, MemoryStorage, Storage};
pub use forms::{Category, FormField, VerbForms, VerbRecord};
pub use inflection::{derive_gerund, derive_present_participle, derive_third_person_singular};
pub use narration::{EspeakSpeaker, Narrator, PlaybackOutcome, SilentSpeaker, Speaker, Voice};
pub use paradigm::{Tense, TenseEntry, generate_tense_paradigm};
pub use submission::{VerbSubmission, derive_forms, verb_id};

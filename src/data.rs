use crate::forms::VerbRecord;

pub const BUNDLED_VERBS: &str = include_str!("../data/verbs.json");

pub fn load_bundled_verbs() -> Result<Vec<VerbRecord>, serde_json::Error> {
    serde_json::from_str(BUNDLED_VERBS)
}

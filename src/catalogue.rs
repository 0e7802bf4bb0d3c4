//! The verb catalogue and the display list built on top of it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data;
use crate::error::{Error, Result};
use crate::forms::VerbRecord;

/// Fixed, ordered reference set of verbs. Immutable once built; share it
/// through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    verbs: Vec<VerbRecord>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// The verbs shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_records(data::load_bundled_verbs()?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_records(serde_json::from_str(json)?)
    }

    /// Rejects duplicate ids and records with an empty form.
    pub fn from_records(verbs: Vec<VerbRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(verbs.len());
        for (i, verb) in verbs.iter().enumerate() {
            if let Some(field) = verb.conjugation.missing_field() {
                return Err(Error::IncompleteForms {
                    id: verb.id.clone(),
                    field,
                });
            }
            if index.insert(verb.id.clone(), i).is_some() {
                return Err(Error::DuplicateVerb(verb.id.clone()));
            }
        }
        tracing::debug!(count = verbs.len(), "loaded verb catalogue");
        Ok(Self { verbs, index })
    }

    pub fn get(&self, id: &str) -> Option<&VerbRecord> {
        self.index.get(id).map(|&i| &self.verbs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Default selection of the browse view.
    pub fn first(&self) -> Option<&VerbRecord> {
        self.verbs.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerbRecord> {
        self.verbs.iter()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// What the user browses: the shared catalogue followed by verbs added
/// during this session. Additions are not persisted.
#[derive(Debug, Clone)]
pub struct VerbList {
    catalogue: Arc<Catalogue>,
    added: Vec<VerbRecord>,
}

impl VerbList {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self {
            catalogue,
            added: Vec::new(),
        }
    }

    pub fn add(&mut self, record: VerbRecord) -> Result<()> {
        if self.get(&record.id).is_some() {
            tracing::warn!(id = %record.id, "rejected duplicate verb");
            return Err(Error::DuplicateVerb(record.id));
        }
        if let Some(field) = record.conjugation.missing_field() {
            return Err(Error::IncompleteForms { id: record.id, field });
        }
        tracing::debug!(id = %record.id, "added verb to session list");
        self.added.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&VerbRecord> {
        self.catalogue
            .get(id)
            .or_else(|| self.added.iter().find(|verb| verb.id == id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerbRecord> {
        self.catalogue.iter().chain(self.added.iter())
    }

    pub fn added(&self) -> &[VerbRecord] {
        &self.added
    }

    pub fn len(&self) -> usize {
        self.catalogue.len() + self.added.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

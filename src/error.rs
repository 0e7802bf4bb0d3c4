//! Error types for conjuga-rs

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::forms::FormField;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate verb id: {0}")]
    DuplicateVerb(String),

    #[error("Verb {id} has an empty {field} form")]
    IncompleteForms { id: String, field: FormField },

    #[error("Narration already playing for {active}")]
    NarrationBusy { active: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Field-keyed messages for a rejected verb submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    messages: BTreeMap<FormField, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.messages.keys().copied()
    }

    pub fn messages(&self) -> &BTreeMap<FormField, String> {
        &self.messages
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .messages
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Failure reported by a [`crate::Speaker`]. Narration logs these and
/// carries on; they never surface as [`Error`].
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech synthesis unavailable: {0}")]
    Unavailable(String),

    #[error("speech synthesis failed: {0}")]
    Failed(String),
}

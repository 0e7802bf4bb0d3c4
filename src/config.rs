//! Configuration for the collaborators around the conjugation engine

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::narration::Voice;

fn default_favorites_path() -> PathBuf {
    PathBuf::from("verb-favorites.json")
}

fn default_narration_pause_ms() -> u64 {
    500
}

fn default_speech_lang() -> String {
    "en-US".to_string()
}

fn default_speech_rate() -> f32 {
    0.8
}

fn default_espeak_program() -> String {
    "espeak-ng".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File backing the favorites store
    #[serde(default = "default_favorites_path")]
    pub favorites_path: PathBuf,

    /// Pause between narrated utterances
    #[serde(default = "default_narration_pause_ms")]
    pub narration_pause_ms: u64,

    /// BCP 47 language tag for speech
    #[serde(default = "default_speech_lang")]
    pub speech_lang: String,

    /// Speech rate relative to normal (1.0)
    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,

    /// Speech synthesizer executable
    #[serde(default = "default_espeak_program")]
    pub espeak_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            favorites_path: default_favorites_path(),
            narration_pause_ms: default_narration_pause_ms(),
            speech_lang: default_speech_lang(),
            speech_rate: default_speech_rate(),
            espeak_program: default_espeak_program(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn narration_pause(&self) -> Duration {
        Duration::from_millis(self.narration_pause_ms)
    }

    pub fn voice(&self) -> Voice {
        Voice {
            lang: self.speech_lang.clone(),
            rate: self.speech_rate,
        }
    }
}

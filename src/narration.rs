use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result, SpeechError};
use crate::forms::VerbRecord;
use crate::overrides;

/// espeak-ng speaks at 175 words per minute at rate 1.0.
const ESPEAK_BASE_WPM: f32 = 175.0;
const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub lang: String,
    pub rate: f32,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            rate: 0.8,
        }
    }
}

/// The lines read out for one verb: infinitive, present, past simple, past
/// participle and gerund.
pub fn narration_script(verb: &VerbRecord) -> Vec<String> {
    let forms = &verb.conjugation;
    let present = overrides::narration_present(&verb.infinitive)
        .map(str::to_string)
        .unwrap_or_else(|| format!("He {}", forms.simple_present));
    vec![
        forms.infinitive.clone(),
        present,
        forms.past_simple.clone(),
        forms.past_participle.clone(),
        forms.gerund.clone(),
    ]
}

/// Text-to-speech capability used by the [`Narrator`].
pub trait Speaker: Send + Sync {
    /// Speak one utterance, returning once it has been spoken or cancelled.
    fn speak(&self, text: &str, voice: &Voice) -> std::result::Result<(), SpeechError>;

    /// Cut the current utterance short. Must be harmless when idle.
    fn cancel(&self) {}

    /// Forget any cancel left over from a previous playback.
    fn reset(&self) {}
}

/// Stand-in when no synthesizer is available: every utterance completes
/// immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, text: &str, _voice: &Voice) -> std::result::Result<(), SpeechError> {
        tracing::debug!(text, "no speech capability, skipping utterance");
        Ok(())
    }
}

/// Speaks through the `espeak-ng` command line program.
pub struct EspeakSpeaker {
    program: String,
    current: Mutex<Option<Child>>,
    interrupted: AtomicBool,
}

impl EspeakSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current: Mutex::new(None),
            interrupted: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.espeak_program.clone())
    }

    fn voice_name(voice: &Voice) -> String {
        voice.lang.to_lowercase()
    }

    fn words_per_minute(voice: &Voice) -> u32 {
        (ESPEAK_BASE_WPM * voice.rate).round().max(1.0) as u32
    }

    fn current(&self) -> MutexGuard<'_, Option<Child>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Speaker for EspeakSpeaker {
    fn speak(&self, text: &str, voice: &Voice) -> std::result::Result<(), SpeechError> {
        let mut child = Command::new(&self.program)
            .arg("-v")
            .arg(Self::voice_name(voice))
            .arg("-s")
            .arg(Self::words_per_minute(voice).to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SpeechError::Unavailable(format!("{} not found", self.program)),
                _ => SpeechError::Failed(format!("{}: {}", self.program, e)),
            })?;
        {
            // A cancel that landed before the spawn still stops this utterance.
            let mut current = self.current();
            if self.interrupted.load(Ordering::SeqCst) {
                if let Err(e) = child.kill() {
                    tracing::debug!(error = %e, "speech process already gone");
                }
                let _ = child.wait();
                return Ok(());
            }
            *current = Some(child);
        }

        // Poll instead of wait() so cancel() can reach the child.
        let status = loop {
            {
                let mut current = self.current();
                let Some(child) = current.as_mut() else {
                    return Ok(());
                };
                match child.try_wait() {
                    Ok(Some(status)) => {
                        current.take();
                        break status;
                    }
                    Ok(None) => {}
                    Err(e) => {
                        current.take();
                        return Err(SpeechError::Failed(e.to_string()));
                    }
                }
            }
            thread::sleep(CHILD_POLL_INTERVAL);
        };

        if status.success() || self.interrupted.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SpeechError::Failed(format!("{} exited with {}", self.program, status)))
        }
    }

    fn cancel(&self) {
        let mut current = self.current();
        self.interrupted.store(true, Ordering::SeqCst);
        if let Some(child) = current.as_mut() {
            if let Err(e) = child.kill() {
                tracing::debug!(error = %e, "speech process already gone");
            }
        }
    }

    fn reset(&self) {
        self.interrupted.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every line was played, or playback gave up after a speech failure.
    Finished,
    /// Playback was cancelled part way through.
    Cancelled,
    /// This call stopped a playback already running for the same verb.
    Stopped,
}

#[derive(Debug, Default)]
struct PlaybackState {
    active: Option<String>,
    cancelled: bool,
}

/// Plays narration scripts one utterance at a time with a fixed pause in
/// between. Only one verb plays at a time.
pub struct Narrator<S: Speaker> {
    speaker: S,
    voice: Voice,
    pause: Duration,
    state: Mutex<PlaybackState>,
    wake: Condvar,
}

impl<S: Speaker> Narrator<S> {
    pub fn new(speaker: S, voice: Voice, pause: Duration) -> Self {
        Self {
            speaker,
            voice,
            pause,
            state: Mutex::new(PlaybackState::default()),
            wake: Condvar::new(),
        }
    }

    pub fn from_config(speaker: S, config: &Config) -> Self {
        Self::new(speaker, config.voice(), config.narration_pause())
    }

    fn state(&self) -> MutexGuard<'_, PlaybackState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn active(&self) -> Option<String> {
        self.state().active.clone()
    }

    pub fn is_playing(&self, verb_id: &str) -> bool {
        self.state().active.as_deref() == Some(verb_id)
    }

    pub fn play_verb(&self, verb: &VerbRecord) -> Result<PlaybackOutcome> {
        self.play(&verb.id, &narration_script(verb))
    }

    /// Play `lines` for `verb_id`, blocking until done.
    ///
    /// Calling this for the verb already playing stops it instead; calling it
    /// for another verb while one is playing fails with
    /// [`Error::NarrationBusy`].
    pub fn play(&self, verb_id: &str, lines: &[String]) -> Result<PlaybackOutcome> {
        {
            let mut state = self.state();
            match state.active.clone() {
                Some(active) if active == verb_id => {
                    drop(state);
                    self.cancel();
                    return Ok(PlaybackOutcome::Stopped);
                }
                Some(active) => return Err(Error::NarrationBusy { active }),
                None => {
                    state.active = Some(verb_id.to_string());
                    state.cancelled = false;
                }
            }
        }
        self.speaker.reset();

        tracing::debug!(verb_id, lines = lines.len(), "narration started");
        let outcome = self.run(lines);
        tracing::debug!(verb_id, ?outcome, "narration ended");

        let mut state = self.state();
        state.active = None;
        state.cancelled = false;
        self.wake.notify_all();
        Ok(outcome)
    }

    fn run(&self, lines: &[String]) -> PlaybackOutcome {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 && self.pause_cancelled() {
                return PlaybackOutcome::Cancelled;
            }
            if self.state().cancelled {
                return PlaybackOutcome::Cancelled;
            }
            if let Err(e) = self.speaker.speak(line, &self.voice) {
                tracing::error!(error = %e, line = %line, "error playing audio");
                return PlaybackOutcome::Finished;
            }
        }
        if self.state().cancelled {
            PlaybackOutcome::Cancelled
        } else {
            PlaybackOutcome::Finished
        }
    }

    /// Sleep for the inter-utterance pause, waking early on cancel.
    fn pause_cancelled(&self) -> bool {
        let state = self.state();
        let (state, _) = self
            .wake
            .wait_timeout_while(state, self.pause, |s| !s.cancelled)
            .unwrap_or_else(|e| e.into_inner());
        state.cancelled
    }

    /// Stop the current playback. No-op when nothing is playing.
    pub fn cancel(&self) {
        let mut state = self.state();
        if state.active.is_none() {
            return;
        }
        state.cancelled = true;
        drop(state);
        self.speaker.cancel();
        self.wake.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use std::sync::Arc;
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Mutex<Vec<String>>,
        cancels: Mutex<usize>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&self, text: &str, _voice: &Voice) -> std::result::Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn cancel(&self) {
            *self.cancels.lock().unwrap() += 1;
        }
    }

    struct FailingSpeaker;

    impl Speaker for FailingSpeaker {
        fn speak(&self, _text: &str, _voice: &Voice) -> std::result::Result<(), SpeechError> {
            Err(SpeechError::Unavailable("no voices".to_string()))
        }
    }

    fn lines(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn wait_until_active<S: Speaker>(narrator: &Narrator<S>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while narrator.active().is_none() {
            assert!(Instant::now() < deadline, "narration never started");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_script_for_regular_verb() {
        let catalogue = Catalogue::bundled().unwrap();
        let script = narration_script(catalogue.get("go").unwrap());
        assert_eq!(script, lines(&["go", "He goes", "went", "gone", "going"]));
    }

    #[test]
    fn test_script_for_copula() {
        let catalogue = Catalogue::bundled().unwrap();
        let script = narration_script(catalogue.get("be").unwrap());
        assert_eq!(
            script,
            lines(&["be", "I am, you are, he is", "was/were", "been", "being"])
        );
    }

    #[test]
    fn test_plays_every_line() {
        let narrator = Narrator::new(RecordingSpeaker::default(), Voice::default(), Duration::ZERO);
        let outcome = narrator.play("eat", &lines(&["eat", "He eats"])).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert_eq!(*narrator.speaker().spoken.lock().unwrap(), lines(&["eat", "He eats"]));
        assert_eq!(narrator.active(), None);
    }

    #[test]
    fn test_speech_failure_finishes_quietly() {
        let narrator = Narrator::new(FailingSpeaker, Voice::default(), Duration::ZERO);
        let outcome = narrator.play("go", &lines(&["go", "He goes"])).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert!(narrator.active().is_none());
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let narrator = Narrator::new(RecordingSpeaker::default(), Voice::default(), Duration::ZERO);
        narrator.cancel();
        narrator.cancel();
        assert_eq!(*narrator.speaker().cancels.lock().unwrap(), 0);
        let outcome = narrator.play("go", &lines(&["go"])).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Finished);
    }

    #[test]
    fn test_same_verb_stops_and_other_verb_is_busy() {
        let narrator = Arc::new(Narrator::new(
            RecordingSpeaker::default(),
            Voice::default(),
            Duration::from_secs(30),
        ));

        let player = {
            let narrator = Arc::clone(&narrator);
            thread::spawn(move || narrator.play("go", &lines(&["go", "He goes", "went"])))
        };
        wait_until_active(&narrator);
        assert!(narrator.is_playing("go"));

        let busy = narrator.play("eat", &lines(&["eat"]));
        assert!(matches!(busy, Err(Error::NarrationBusy { active }) if active == "go"));

        let started = Instant::now();
        let stop = narrator.play("go", &lines(&["go"])).unwrap();
        assert_eq!(stop, PlaybackOutcome::Stopped);

        let outcome = player.join().unwrap().unwrap();
        assert_eq!(outcome, PlaybackOutcome::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(10));
        assert_eq!(*narrator.speaker().spoken.lock().unwrap(), lines(&["go"]));
        assert_eq!(*narrator.speaker().cancels.lock().unwrap(), 1);
        assert!(narrator.active().is_none());
    }

    #[test]
    fn test_missing_espeak_is_unavailable() {
        let speaker = EspeakSpeaker::new("conjuga-no-such-speech-program");
        let err = speaker.speak("go", &Voice::default()).unwrap_err();
        assert!(matches!(err, SpeechError::Unavailable(_)));
        speaker.cancel();

        let narrator = Narrator::new(speaker, Voice::default(), Duration::ZERO);
        let outcome = narrator.play("go", &lines(&["go", "He goes"])).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Finished);
    }

    #[cfg(unix)]
    fn slow_speech_program(dir: &std::path::Path) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("slow-speech");
        std::fs::write(&path, "#!/bin/sh\nexec sleep 30\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    #[test]
    fn test_espeak_cancel_before_spawn_stops_next_utterance() {
        let dir = tempfile::tempdir().unwrap();
        let speaker = EspeakSpeaker::new(slow_speech_program(dir.path()));

        speaker.cancel();
        let started = Instant::now();
        speaker.speak("go", &Voice::default()).unwrap();
        assert!(started.elapsed() < Duration::from_secs(10));
        assert!(speaker.current().is_none());

        speaker.reset();
        assert!(!speaker.interrupted.load(Ordering::SeqCst));
    }

    #[cfg(unix)]
    #[test]
    fn test_espeak_cancel_kills_running_utterance() {
        let dir = tempfile::tempdir().unwrap();
        let speaker = Arc::new(EspeakSpeaker::new(slow_speech_program(dir.path())));

        let talker = {
            let speaker = Arc::clone(&speaker);
            thread::spawn(move || speaker.speak("go", &Voice::default()))
        };
        let deadline = Instant::now() + Duration::from_secs(5);
        while speaker.current().is_none() {
            assert!(Instant::now() < deadline, "speech never started");
            thread::sleep(Duration::from_millis(1));
        }

        let started = Instant::now();
        speaker.cancel();
        talker.join().unwrap().unwrap();
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_playback_starts_fresh_after_idle_cancel() {
        #[derive(Default)]
        struct ResetCounting {
            resets: Mutex<usize>,
        }

        impl Speaker for ResetCounting {
            fn speak(&self, _text: &str, _voice: &Voice) -> std::result::Result<(), SpeechError> {
                Ok(())
            }

            fn reset(&self) {
                *self.resets.lock().unwrap() += 1;
            }
        }

        let narrator = Narrator::new(ResetCounting::default(), Voice::default(), Duration::ZERO);
        narrator.play("go", &lines(&["go"])).unwrap();
        narrator.play("be", &lines(&["be"])).unwrap();
        assert_eq!(*narrator.speaker().resets.lock().unwrap(), 2);
    }

    #[test]
    fn test_espeak_rate() {
        assert_eq!(EspeakSpeaker::words_per_minute(&Voice::default()), 140);
        assert_eq!(EspeakSpeaker::voice_name(&Voice::default()), "en-us");
    }
}

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::{DEFAULT_LOCALE, VoiceSettings};
use crate::error::BridgeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// Single utterance, final results only.
    #[must_use]
    pub fn single_shot(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            continuous: false,
            interim_results: false,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self::single_shot(DEFAULT_LOCALE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Start,
    Result(String),
    Error(String),
    End,
}

/// Speech-to-text capability.
///
/// `start` returns immediately; progress arrives on `events`. Implementations
/// may keep sending after the receiver is gone, those sends are simply lost.
pub trait SpeechRecognizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `BridgeError` if recognition cannot be started at all.
    fn start(
        &self,
        config: &RecognitionConfig,
        events: UnboundedSender<RecognitionEvent>,
    ) -> Result<(), BridgeError>;

    fn abort(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>, voice: &VoiceSettings) -> Self {
        Self {
            text: text.into(),
            locale: voice.locale.clone(),
            rate: voice.rate,
            pitch: voice.pitch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    Start,
    End,
    Error(String),
}

/// Text-to-speech capability.
pub trait SpeechSynthesizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `BridgeError` if the utterance cannot be queued.
    fn speak(
        &self,
        utterance: &Utterance,
        events: UnboundedSender<SynthesisEvent>,
    ) -> Result<(), BridgeError>;

    /// Stop whatever is being spoken.
    fn cancel(&self);
}

/// What the runtime offers. `None` means the capability gate is closed.
#[derive(Clone, Default)]
pub struct SpeechCapabilities {
    pub recognizer: Option<Arc<dyn SpeechRecognizer>>,
    pub synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
}

impl SpeechCapabilities {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }
}

impl fmt::Debug for SpeechCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechCapabilities")
            .field("recognizer", &self.recognizer.is_some())
            .field("synthesizer", &self.synthesizer.is_some())
            .finish()
    }
}

//! Speech capture and playback over optional platform capabilities.

mod attempt;
mod capability;
mod capture;
mod playback;

pub use attempt::{AttemptCounter, AttemptToken};
pub use capability::{
    RecognitionConfig, RecognitionEvent, SpeechCapabilities, SpeechRecognizer, SpeechSynthesizer,
    SynthesisEvent, Utterance,
};
pub use capture::{CaptureState, VoiceCaptureAdapter};
pub use playback::{
    AdvanceReason, NarrationOutcome, PlaybackPlan, PlaybackState, SpeechPlaybackController,
};

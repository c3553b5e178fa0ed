use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::attempt::{AttemptCounter, AttemptToken};
use super::capability::{
    RecognitionConfig, RecognitionEvent, SpeechCapabilities, SpeechRecognizer,
};
use crate::error::CaptureError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Listening,
}

/// Captures one spoken utterance at a time through an optional recognizer.
pub struct VoiceCaptureAdapter {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    config: RecognitionConfig,
    attempts: AttemptCounter,
    state: watch::Sender<CaptureState>,
}

impl VoiceCaptureAdapter {
    #[must_use]
    pub fn new(recognizer: Option<Arc<dyn SpeechRecognizer>>, config: RecognitionConfig) -> Self {
        Self {
            recognizer,
            config,
            attempts: AttemptCounter::new(),
            state: watch::Sender::new(CaptureState::Idle),
        }
    }

    #[must_use]
    pub fn from_capabilities(capabilities: &SpeechCapabilities, locale: &str) -> Self {
        Self::new(
            capabilities.recognizer.clone(),
            RecognitionConfig::single_shot(locale),
        )
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    #[must_use]
    pub fn state(&self) -> CaptureState {
        *self.state.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CaptureState> {
        self.state.subscribe()
    }

    /// Listen for a single utterance and return its trimmed transcript.
    ///
    /// Calling this while a capture is already running does nothing and returns
    /// `CaptureError::Busy`. Failures are never retried here.
    ///
    /// # Errors
    ///
    /// - `CapabilityUnavailable` when no recognizer exists.
    /// - `CaptureFailed` on a recognition error or when recognition ends without text.
    /// - `Cancelled` when [`cancel`](Self::cancel) ends the attempt.
    pub async fn capture(&self) -> Result<String, CaptureError> {
        let Some(recognizer) = self.recognizer.as_ref() else {
            warn!("speech recognition unavailable");
            return Err(CaptureError::CapabilityUnavailable);
        };

        let claimed = self.state.send_if_modified(|state| {
            if *state == CaptureState::Idle {
                *state = CaptureState::Listening;
                true
            } else {
                false
            }
        });
        if !claimed {
            debug!("capture requested while already listening");
            return Err(CaptureError::Busy);
        }

        let token = self.attempts.begin();
        let guard = ListeningGuard {
            adapter: self,
            recognizer: recognizer.as_ref(),
            token,
            finished: false,
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        if let Err(err) = recognizer.start(&self.config, tx) {
            guard.finish();
            warn!(error = %err, "speech recognition failed to start");
            return Err(CaptureError::CaptureFailed { reason: err.0 });
        }
        debug!(attempt = token.value(), locale = %self.config.locale, "listening");

        let outcome = tokio::select! {
            outcome = await_transcript(&mut rx) => outcome,
            () = self.attempts.superseded(token) => Err(CaptureError::Cancelled),
        };
        guard.finish();

        match &outcome {
            Ok(_) => info!(attempt = token.value(), "voice capture produced a transcript"),
            Err(CaptureError::CaptureFailed { reason }) => {
                warn!(attempt = token.value(), %reason, "voice capture failed");
            }
            Err(err) => debug!(attempt = token.value(), %err, "voice capture ended"),
        }
        outcome
    }

    /// Abandon the running capture, if any. Its late events are ignored.
    pub fn cancel(&self) {
        self.attempts.invalidate();
        let was = self.state.send_replace(CaptureState::Idle);
        if was == CaptureState::Listening {
            if let Some(recognizer) = &self.recognizer {
                recognizer.abort();
            }
        }
    }
}

async fn await_transcript(
    rx: &mut UnboundedReceiver<RecognitionEvent>,
) -> Result<String, CaptureError> {
    while let Some(event) = rx.recv().await {
        match event {
            RecognitionEvent::Start => debug!("recognition started"),
            RecognitionEvent::Result(transcript) => {
                let transcript = transcript.trim();
                if transcript.is_empty() {
                    return Err(CaptureError::CaptureFailed {
                        reason: "empty transcript".to_string(),
                    });
                }
                return Ok(transcript.to_string());
            }
            RecognitionEvent::Error(reason) => return Err(CaptureError::CaptureFailed { reason }),
            RecognitionEvent::End => break,
        }
    }
    Err(CaptureError::CaptureFailed {
        reason: "recognition ended without a result".to_string(),
    })
}

/// Returns the adapter to `Idle` however the attempt ends, aborting the
/// recognizer when the capture future is dropped mid-attempt.
struct ListeningGuard<'a> {
    adapter: &'a VoiceCaptureAdapter,
    recognizer: &'a dyn SpeechRecognizer,
    token: AttemptToken,
    finished: bool,
}

impl ListeningGuard<'_> {
    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for ListeningGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            debug!(attempt = self.token.value(), "capture dropped while listening");
            self.recognizer.abort();
        }
        if self.adapter.attempts.is_current(self.token) {
            self.adapter.state.send_replace(CaptureState::Idle);
        }
    }
}

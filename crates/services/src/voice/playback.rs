use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::attempt::{AttemptCounter, AttemptToken};
use super::capability::{SpeechCapabilities, SpeechSynthesizer, SynthesisEvent, Utterance};
use crate::config::{NarrationTimings, OnboardingConfig, VoiceSettings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Speaking,
    Completed,
    Failed,
}

/// What happens on entry to the narration stage.
#[derive(Clone)]
pub enum PlaybackPlan {
    Narrate(Arc<dyn SpeechSynthesizer>),
    /// No synthesis at all; advance after the delay.
    SkipWithTimer(Duration),
}

impl fmt::Debug for PlaybackPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narrate(_) => f.write_str("Narrate"),
            Self::SkipWithTimer(delay) => f.debug_tuple("SkipWithTimer").field(delay).finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceReason {
    Completed,
    Failed(String),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationOutcome {
    /// The flow should move on.
    Advance(AdvanceReason),
    /// The attempt was cancelled; nothing should navigate.
    Cancelled,
    /// This controller already narrated.
    AlreadyStarted,
}

/// Speaks the intro sentence once per stage entry and decides when the flow
/// advances.
pub struct SpeechPlaybackController {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    voice: VoiceSettings,
    timings: NarrationTimings,
    attempts: AttemptCounter,
    started: AtomicBool,
    state: watch::Sender<PlaybackState>,
}

impl SpeechPlaybackController {
    #[must_use]
    pub fn new(
        synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
        voice: VoiceSettings,
        timings: NarrationTimings,
    ) -> Self {
        Self {
            synthesizer,
            voice,
            timings,
            attempts: AttemptCounter::new(),
            started: AtomicBool::new(false),
            state: watch::Sender::new(PlaybackState::Idle),
        }
    }

    #[must_use]
    pub fn from_capabilities(capabilities: &SpeechCapabilities, config: &OnboardingConfig) -> Self {
        Self::new(
            capabilities.synthesizer.clone(),
            config.voice.clone(),
            config.narration,
        )
    }

    #[must_use]
    pub fn plan(&self) -> PlaybackPlan {
        match &self.synthesizer {
            Some(synthesizer) => PlaybackPlan::Narrate(Arc::clone(synthesizer)),
            None => PlaybackPlan::SkipWithTimer(self.timings.unsupported_fallback),
        }
    }

    #[must_use]
    pub fn timings(&self) -> NarrationTimings {
        self.timings
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        *self.state.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state.subscribe()
    }

    /// Narrate `sentence` and resolve once the flow should advance.
    ///
    /// Only the first call does anything; later calls return
    /// `NarrationOutcome::AlreadyStarted`. The post-narration delay starts
    /// after the terminal synthesis event.
    pub async fn narrate(&self, sentence: &str) -> NarrationOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("narration already started for this stage entry");
            return NarrationOutcome::AlreadyStarted;
        }
        let token = self.attempts.begin();

        let reason = match self.plan() {
            PlaybackPlan::SkipWithTimer(_) => {
                info!("speech synthesis unavailable, advancing on timer");
                AdvanceReason::Unsupported
            }
            PlaybackPlan::Narrate(synthesizer) => {
                if !self.hold(token, self.timings.pre_speak).await {
                    return NarrationOutcome::Cancelled;
                }
                match self.speak(token, synthesizer.as_ref(), sentence).await {
                    Some(reason) => reason,
                    None => return NarrationOutcome::Cancelled,
                }
            }
        };

        let delay = match &reason {
            AdvanceReason::Completed => self.timings.after_completed,
            AdvanceReason::Failed(_) => self.timings.after_failed,
            AdvanceReason::Unsupported => self.timings.unsupported_fallback,
        };
        if !self.hold(token, delay).await {
            return NarrationOutcome::Cancelled;
        }
        debug!(attempt = token.value(), ?reason, "narration concluded");
        NarrationOutcome::Advance(reason)
    }

    /// Stop narration and make sure the pending attempt never advances.
    pub fn cancel(&self) {
        self.attempts.invalidate();
        self.state.send_replace(PlaybackState::Idle);
        if self.started.load(Ordering::SeqCst) {
            if let Some(synthesizer) = &self.synthesizer {
                synthesizer.cancel();
            }
        }
    }

    /// `None` when the attempt was superseded before a terminal event.
    async fn speak(
        &self,
        token: AttemptToken,
        synthesizer: &dyn SpeechSynthesizer,
        sentence: &str,
    ) -> Option<AdvanceReason> {
        let utterance = Utterance::new(sentence, &self.voice);
        let (tx, mut rx) = mpsc::unbounded_channel();
        if let Err(err) = synthesizer.speak(&utterance, tx) {
            warn!(error = %err, "speech synthesis could not start");
            self.transition(token, PlaybackState::Failed);
            return Some(AdvanceReason::Failed(err.0));
        }

        tokio::select! {
            reason = self.await_terminal(token, &mut rx) => Some(reason),
            () = self.attempts.superseded(token) => None,
        }
    }

    async fn await_terminal(
        &self,
        token: AttemptToken,
        rx: &mut UnboundedReceiver<SynthesisEvent>,
    ) -> AdvanceReason {
        while let Some(event) = rx.recv().await {
            match event {
                SynthesisEvent::Start => self.transition(token, PlaybackState::Speaking),
                SynthesisEvent::End => {
                    self.transition(token, PlaybackState::Completed);
                    return AdvanceReason::Completed;
                }
                SynthesisEvent::Error(reason) => {
                    warn!(%reason, "speech synthesis failed");
                    self.transition(token, PlaybackState::Failed);
                    return AdvanceReason::Failed(reason);
                }
            }
        }
        self.transition(token, PlaybackState::Failed);
        AdvanceReason::Failed("synthesis ended without a terminal event".to_string())
    }

    fn transition(&self, token: AttemptToken, next: PlaybackState) {
        if self.attempts.is_current(token) {
            let previous = self.state.send_replace(next);
            debug!(attempt = token.value(), ?previous, ?next, "playback state");
        }
    }

    /// Sleep unless superseded first. Returns whether the attempt is still live.
    async fn hold(&self, token: AttemptToken, delay: Duration) -> bool {
        tokio::select! {
            () = tokio::time::sleep(delay) => self.attempts.is_current(token),
            () = self.attempts.superseded(token) => false,
        }
    }
}

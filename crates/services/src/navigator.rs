use onboard_core::model::{AssessmentResults, SessionKey, Stage, UserProfile};
use storage::StorageError;
use tracing::{debug, info, warn};

use crate::error::MissingSessionState;
use crate::session_state::SessionStateService;
use crate::voice::{NarrationOutcome, SpeechPlaybackController};

/// Session state a stage was admitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub profile: Option<UserProfile>,
    pub results: Option<AssessmentResults>,
}

/// Guards stage entry and decides where the flow goes next.
#[derive(Clone)]
pub struct StageNavigator {
    state: SessionStateService,
}

impl StageNavigator {
    #[must_use]
    pub fn new(state: SessionStateService) -> Self {
        Self { state }
    }

    /// Check `stage`'s entry guard against the current session state.
    ///
    /// A profile without name and aim counts as missing. A backend failure on
    /// read is logged and also treated as missing.
    ///
    /// # Errors
    ///
    /// Returns `MissingSessionState` naming the absent keys and the stage to
    /// redirect to.
    pub async fn enter(&self, stage: Stage) -> Result<StageSnapshot, MissingSessionState> {
        let profile = self
            .read(SessionKey::PersonalityUserData, self.state.profile().await)
            .filter(UserProfile::has_identity);
        let results = self.read(SessionKey::PersonalityResults, self.state.results().await);

        let missing: Vec<SessionKey> = stage
            .required_keys()
            .iter()
            .copied()
            .filter(|key| match key {
                SessionKey::PersonalityUserData => profile.is_none(),
                SessionKey::PersonalityResults => results.is_none(),
            })
            .collect();

        if !missing.is_empty() {
            let redirect = stage.producer();
            info!(?stage, ?missing, ?redirect, "entry guard redirect");
            return Err(MissingSessionState {
                stage,
                missing,
                redirect,
            });
        }

        debug!(?stage, "stage entered");
        Ok(StageSnapshot {
            stage,
            profile,
            results,
        })
    }

    /// The stage that follows `from`, if any.
    #[must_use]
    pub fn advance(&self, from: Stage) -> Option<Stage> {
        let next = from.next();
        debug!(?from, ?next, "advance");
        next
    }

    /// Clear the session and return to the landing stage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be cleared.
    pub async fn start_over(&self) -> Result<Stage, StorageError> {
        self.state.clear().await?;
        info!("session cleared");
        Ok(Stage::Home)
    }

    /// Narrate on the intro stage and return the stage to navigate to once
    /// narration concludes. Cancelled or repeated narration yields `None`.
    pub async fn run_narration(
        &self,
        controller: &SpeechPlaybackController,
        sentence: &str,
    ) -> Option<Stage> {
        match controller.narrate(sentence).await {
            NarrationOutcome::Advance(reason) => {
                info!(?reason, "narration concluded");
                self.advance(Stage::PersonalityIntro)
            }
            NarrationOutcome::Cancelled | NarrationOutcome::AlreadyStarted => None,
        }
    }

    fn read<T>(&self, key: SessionKey, value: Result<Option<T>, StorageError>) -> Option<T> {
        match value {
            Ok(value) => value,
            Err(err) => {
                warn!(%key, error = %err, "session read failed, treating as absent");
                None
            }
        }
    }
}

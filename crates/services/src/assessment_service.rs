use std::time::Duration;

use onboard_core::model::{
    AssessmentAnswers, AssessmentResults, ProfileDraft, UserProfile, ValidationError,
};
use onboard_core::Clock;
use tracing::info;

use crate::error::AssessmentServiceError;
use crate::session_state::SessionStateService;

/// Scores the questionnaire and writes both keys the narration stage needs.
#[derive(Clone)]
pub struct AssessmentService {
    clock: Clock,
    state: SessionStateService,
    latency: Duration,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, state: SessionStateService, latency: Duration) -> Self {
        Self {
            clock,
            state,
            latency,
        }
    }

    /// Validate, score and persist. Nothing is written unless everything validates.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Validation` for blank profile fields or
    /// unanswered questions, and `AssessmentServiceError::Storage` if saving fails.
    pub async fn submit(
        &self,
        draft: &ProfileDraft,
        answers: &AssessmentAnswers,
    ) -> Result<(UserProfile, AssessmentResults), AssessmentServiceError> {
        let profile = draft.validate()?;
        let results = AssessmentResults::score(answers, self.clock.now()).map_err(|_| {
            ValidationError::IncompleteAssessment {
                unanswered: answers.unanswered(),
            }
        })?;

        tokio::time::sleep(self.latency).await;
        self.state.save_profile(&profile).await?;
        self.state.save_results(&results).await?;
        info!(dominant = ?results.dominant, "assessment submitted");
        Ok((profile, results))
    }
}

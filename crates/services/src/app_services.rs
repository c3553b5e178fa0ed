use std::sync::Arc;

use onboard_core::model::SessionId;
use storage::{SessionStorage, Storage};

use crate::Clock;
use crate::assessment_service::AssessmentService;
use crate::auth_service::AuthService;
use crate::config::OnboardingConfig;
use crate::error::AppServicesError;
use crate::identifier::IdentifierGenerator;
use crate::navigator::StageNavigator;
use crate::registration_service::RegistrationService;
use crate::session_state::SessionStateService;
use crate::voice::{SpeechCapabilities, SpeechPlaybackController, VoiceCaptureAdapter};

/// Assembles app-facing services over one session store and one set of
/// speech capabilities.
#[derive(Clone)]
pub struct AppServices {
    config: OnboardingConfig,
    capabilities: SpeechCapabilities,
    session_state: SessionStateService,
    navigator: StageNavigator,
    registration: Arc<RegistrationService>,
    auth: Arc<AuthService>,
    assessment: Arc<AssessmentService>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        config: OnboardingConfig,
        capabilities: SpeechCapabilities,
    ) -> Self {
        let session_state =
            SessionStateService::new(SessionStorage::new(Arc::clone(&storage.session)));
        let navigator = StageNavigator::new(session_state.clone());
        let registration = Arc::new(RegistrationService::new(
            IdentifierGenerator::new(),
            config.submit_latency,
        ));
        let auth = Arc::new(AuthService::new(config.submit_latency));
        let assessment = Arc::new(AssessmentService::new(
            clock,
            session_state.clone(),
            config.submit_latency,
        ));

        Self {
            config,
            capabilities,
            session_state,
            navigator,
            registration,
            auth,
            assessment,
        }
    }

    /// Services over a process-local store that disappears on exit.
    #[must_use]
    pub fn in_memory(
        clock: Clock,
        config: OnboardingConfig,
        capabilities: SpeechCapabilities,
    ) -> Self {
        Self::new(&Storage::in_memory(), clock, config, capabilities)
    }

    /// Build services backed by `SQLite` storage for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: OnboardingConfig,
        capabilities: SpeechCapabilities,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, SessionId::new_random()).await?;
        Ok(Self::new(&storage, clock, config, capabilities))
    }

    /// Same services with a different set of speech capabilities, e.g. once a
    /// runtime probe has finished.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: SpeechCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    #[must_use]
    pub fn capabilities(&self) -> &SpeechCapabilities {
        &self.capabilities
    }

    #[must_use]
    pub fn session_state(&self) -> SessionStateService {
        self.session_state.clone()
    }

    #[must_use]
    pub fn navigator(&self) -> StageNavigator {
        self.navigator.clone()
    }

    #[must_use]
    pub fn registration(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    /// A capture adapter for one screen.
    #[must_use]
    pub fn capture_adapter(&self) -> VoiceCaptureAdapter {
        VoiceCaptureAdapter::from_capabilities(&self.capabilities, &self.config.voice.locale)
    }

    /// A playback controller for one entry into the narration stage.
    #[must_use]
    pub fn playback_controller(&self) -> SpeechPlaybackController {
        SpeechPlaybackController::from_capabilities(&self.capabilities, &self.config)
    }
}

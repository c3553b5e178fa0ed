#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment_service;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod identifier;
pub mod navigator;
pub mod registration_service;
pub mod session_state;
pub mod voice;

pub use onboard_core::Clock;

pub use app_services::AppServices;
pub use assessment_service::AssessmentService;
pub use auth_service::{ADMIN_DASHBOARD_PENDING, ADMIN_WELCOME, AuthService, SignInOutcome};
pub use config::{DEFAULT_LOCALE, NarrationTimings, OnboardingConfig, VoiceSettings};
pub use error::{
    AppServicesError, AssessmentServiceError, AuthError, BridgeError, CaptureError,
    MissingSessionState, RegistrationError,
};
pub use identifier::IdentifierGenerator;
pub use navigator::{StageNavigator, StageSnapshot};
pub use registration_service::RegistrationService;
pub use session_state::SessionStateService;

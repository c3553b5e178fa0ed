//! Shared error types for the services crate.

use thiserror::Error;

use onboard_core::model::{SessionKey, Stage, StudentIdError, ValidationError};
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors from a single voice capture attempt.
///
/// Display strings are the notices shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaptureError {
    #[error("Voice input is not supported in your browser")]
    CapabilityUnavailable,
    #[error("Already listening")]
    Busy,
    #[error("Could not recognize speech. Please try again.")]
    CaptureFailed { reason: String },
    #[error("Voice capture was cancelled")]
    Cancelled,
}

/// Reported by a speech capability that could not even begin its work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BridgeError(pub String);

/// A guarded stage was entered without the session state it depends on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{stage:?} needs {missing:?}; redirecting to {redirect:?}")]
pub struct MissingSessionState {
    pub stage: Stage,
    pub missing: Vec<SessionKey>,
    pub redirect: Stage,
}

/// Errors emitted by `RegistrationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    StudentId(#[from] StudentIdError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors emitted by `AssessmentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while assembling `AppServices`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}

use std::time::Duration;

use onboard_core::model::{AdminSignInDraft, AuthMode, SignInDraft};
use tracing::info;

use crate::error::AuthError;

/// What a successful sign-in should tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn,
    AccountCreated,
}

impl SignInOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SignedIn => "Welcome back!",
            Self::AccountCreated => "Account created successfully!",
        }
    }
}

pub const ADMIN_WELCOME: &str = "Welcome, Admin!";
pub const ADMIN_DASHBOARD_PENDING: &str = "Admin dashboard coming soon!";

/// Simulated sign-in. Credentials are checked for presence only.
#[derive(Debug, Clone)]
pub struct AuthService {
    latency: Duration,
}

impl AuthService {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// # Errors
    ///
    /// Returns `AuthError::Validation` for blank credentials or a mismatched
    /// sign-up confirmation.
    pub async fn sign_in(&self, draft: &SignInDraft) -> Result<SignInOutcome, AuthError> {
        draft.validate()?;
        tokio::time::sleep(self.latency).await;
        let outcome = match draft.mode {
            AuthMode::SignIn => SignInOutcome::SignedIn,
            AuthMode::SignUp => SignInOutcome::AccountCreated,
        };
        info!(mode = ?draft.mode, "user signed in");
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Validation` if email or password is blank.
    pub async fn admin_sign_in(&self, draft: &AdminSignInDraft) -> Result<(), AuthError> {
        draft.validate()?;
        tokio::time::sleep(self.latency).await;
        info!("admin signed in");
        Ok(())
    }
}

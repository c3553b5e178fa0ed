use std::time::Duration;

use onboard_core::model::{RegistrationDraft, StudentId};
use tracing::info;

use crate::error::RegistrationError;
use crate::identifier::IdentifierGenerator;

/// Institute registration: validates the form and issues a student id.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    generator: IdentifierGenerator,
    latency: Duration,
}

impl RegistrationService {
    #[must_use]
    pub fn new(generator: IdentifierGenerator, latency: Duration) -> Self {
        Self { generator, latency }
    }

    /// Validate `draft`, then generate an id after the simulated submission delay.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::Validation` for missing required fields, and
    /// `RegistrationError::StudentId` if the institute code or grade cannot form an id.
    pub async fn register(&self, draft: &RegistrationDraft) -> Result<StudentId, RegistrationError> {
        draft.validate()?;
        let id = self.generator.generate(&draft.institute, &draft.grade)?;
        tokio::time::sleep(self.latency).await;
        info!(%id, institute = %draft.institute, grade = %draft.grade, "student registered");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::model::ValidationError;
    use tokio::time::Instant;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            institute: "KV".into(),
            grade: "10".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn valid_draft_yields_id_after_latency() {
        let service = RegistrationService::new(IdentifierGenerator::new(), Duration::from_millis(1500));
        let started = Instant::now();

        let id = service.register(&draft()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(id.institute_code(), "K");
        assert_eq!(id.grade(), "10");
    }

    #[tokio::test(start_paused = true)]
    async fn missing_fields_fail_without_waiting() {
        let service = RegistrationService::new(IdentifierGenerator::new(), Duration::from_millis(1500));
        let started = Instant::now();
        let mut draft = draft();
        draft.email = " ".into();
        draft.grade.clear();

        let err = service.register(&draft).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_millis(1));
        match err {
            RegistrationError::Validation(ValidationError::MissingRequiredFields { fields }) => {
                assert_eq!(fields, vec!["grade", "email"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            RegistrationError::from(ValidationError::MissingRequiredFields { fields: vec!["x"] })
                .to_string(),
            "Please fill in all required fields"
        );
    }
}

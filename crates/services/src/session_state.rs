use onboard_core::model::{AssessmentResults, SessionKey, UserProfile};
use storage::{SessionStorage, StorageError};
use tracing::debug;

/// Cross-screen onboarding state: the user profile and the assessment results.
///
/// Every read goes to the store, so a value removed elsewhere is never served stale.
#[derive(Clone)]
pub struct SessionStateService {
    storage: SessionStorage,
}

impl SessionStateService {
    #[must_use]
    pub fn new(storage: SessionStorage) -> Self {
        Self { storage }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails. Unparseable data reads as `None`.
    pub async fn profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.storage.get(SessionKey::PersonalityUserData).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.storage
            .set(SessionKey::PersonalityUserData, profile)
            .await?;
        debug!(key = %SessionKey::PersonalityUserData, "profile saved");
        Ok(())
    }

    /// Apply `update` to the stored profile (or an empty one) and save the result.
    ///
    /// Used when fields arrive one at a time, e.g. a name from voice capture.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read or write fails.
    pub async fn update_profile<F>(&self, update: F) -> Result<UserProfile, StorageError>
    where
        F: FnOnce(&mut UserProfile) + Send,
    {
        let mut profile = self.profile().await?.unwrap_or_default();
        update(&mut profile);
        self.save_profile(&profile).await?;
        Ok(profile)
    }

    /// Store a name heard through voice capture, keeping the other profile fields.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the read or write fails.
    pub async fn save_spoken_name(&self, name: String) -> Result<UserProfile, StorageError> {
        let profile = self.update_profile(move |profile| profile.name = name).await?;
        debug!("spoken name saved");
        Ok(profile)
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails. Unparseable data reads as `None`.
    pub async fn results(&self) -> Result<Option<AssessmentResults>, StorageError> {
        self.storage.get(SessionKey::PersonalityResults).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn save_results(&self, results: &AssessmentResults) -> Result<(), StorageError> {
        self.storage
            .set(SessionKey::PersonalityResults, results)
            .await?;
        debug!(key = %SessionKey::PersonalityResults, "results saved");
        Ok(())
    }

    /// Drop every onboarding key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.clear().await
    }
}

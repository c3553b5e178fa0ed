use thiserror::Error;

use crate::model::UserProfile;

/// Form input problems. The display text doubles as the user-facing notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields { fields: Vec<&'static str> },

    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter your name and select age category")]
    MissingIdentity,

    #[error("Please answer every question")]
    IncompleteAssessment { unanswered: usize },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| *label)
        .collect()
}

/// Institute registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub institute: String,
    pub grade: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationDraft {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredFields` unless institute, grade, name
    /// and email are all filled in. Phone is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = missing(&[
            ("institute", self.institute.as_str()),
            ("grade", self.grade.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
        ]);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequiredFields { fields })
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignInDraft {
    /// # Errors
    ///
    /// Returns `MissingRequiredFields` without email or password, and
    /// `PasswordMismatch` when signing up with a confirmation that differs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = missing(&[
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ]);
        if !fields.is_empty() {
            return Err(ValidationError::MissingRequiredFields { fields });
        }
        if self.mode == AuthMode::SignUp && self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSignInDraft {
    pub email: String,
    pub password: String,
}

impl AdminSignInDraft {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingCredentials` if either field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

/// Career explorer identity. Either a name or an age category is enough to browse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerDraft {
    pub name: String,
    pub age_category: String,
}

impl ExplorerDraft {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingIdentity` only when both fields are blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) && is_blank(&self.age_category) {
            return Err(ValidationError::MissingIdentity);
        }
        Ok(())
    }
}

/// Identity fields on the assessment stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: String,
    pub aim: String,
}

impl ProfileDraft {
    /// Validate and trim into a [`UserProfile`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredFields` naming each blank field.
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let fields = missing(&[
            ("name", self.name.as_str()),
            ("age", self.age.as_str()),
            ("aim", self.aim.as_str()),
        ]);
        if !fields.is_empty() {
            return Err(ValidationError::MissingRequiredFields { fields });
        }
        Ok(UserProfile::new(
            self.name.trim(),
            self.age.trim(),
            self.aim.trim(),
        ))
    }
}

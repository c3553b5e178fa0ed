use serde::{Deserialize, Serialize};

/// Identity collected before the assessment; persisted as `personalityUserData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub aim: String,
}

impl UserProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<String>, aim: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            aim: aim.into(),
        }
    }

    /// Name and aim are what the narration stage cannot do without.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.name.trim().is_empty() && !self.aim.trim().is_empty()
    }

    /// The confirmation sentence narrated on the intro stage.
    #[must_use]
    pub fn narration_sentence(&self) -> String {
        format!(
            "I am {}, I am {} years old, and I want to become a {}.",
            self.name, self.age, self.aim
        )
    }
}

use std::fmt;

/// Keys persisted in session storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    PersonalityUserData,
    PersonalityResults,
}

impl SessionKey {
    pub const ALL: [SessionKey; 2] = [
        SessionKey::PersonalityUserData,
        SessionKey::PersonalityResults,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionKey::PersonalityUserData => "personalityUserData",
            SessionKey::PersonalityResults => "personalityResults",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One screen of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Home,
    SignIn,
    AdminSignIn,
    InstituteRegistration,
    CareerExplorer,
    PersonalityAssessment,
    PersonalityIntro,
    PersonalityResults,
}

impl Stage {
    /// Session keys that must be present before the stage may render.
    #[must_use]
    pub const fn required_keys(self) -> &'static [SessionKey] {
        match self {
            Stage::PersonalityIntro | Stage::PersonalityResults => &[
                SessionKey::PersonalityUserData,
                SessionKey::PersonalityResults,
            ],
            _ => &[],
        }
    }

    /// Where a failed entry guard sends the user: the stage that writes the missing keys.
    #[must_use]
    pub const fn producer(self) -> Stage {
        match self {
            Stage::PersonalityIntro | Stage::PersonalityResults => Stage::PersonalityAssessment,
            other => other,
        }
    }

    /// The stage reached once this one concludes, if it moves on at all.
    #[must_use]
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::SignIn | Stage::InstituteRegistration => Some(Stage::CareerExplorer),
            Stage::PersonalityAssessment => Some(Stage::PersonalityIntro),
            Stage::PersonalityIntro => Some(Stage::PersonalityResults),
            Stage::PersonalityResults => Some(Stage::Home),
            Stage::Home | Stage::AdminSignIn | Stage::CareerExplorer => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Stage::Home => "/",
            Stage::SignIn => "/auth",
            Stage::AdminSignIn => "/admin-login",
            Stage::InstituteRegistration => "/partition-login",
            Stage::CareerExplorer => "/career-visualization",
            Stage::PersonalityAssessment => "/personality-assessment",
            Stage::PersonalityIntro => "/personality-intro",
            Stage::PersonalityResults => "/personality-results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_stages_redirect_to_assessment() {
        for stage in [Stage::PersonalityIntro, Stage::PersonalityResults] {
            assert_eq!(stage.required_keys(), &SessionKey::ALL);
            assert_eq!(stage.producer(), Stage::PersonalityAssessment);
        }
        assert!(Stage::PersonalityAssessment.required_keys().is_empty());
        assert!(Stage::InstituteRegistration.required_keys().is_empty());
    }

    #[test]
    fn narration_flow_order() {
        assert_eq!(Stage::PersonalityAssessment.next(), Some(Stage::PersonalityIntro));
        assert_eq!(Stage::PersonalityIntro.next(), Some(Stage::PersonalityResults));
        assert_eq!(Stage::InstituteRegistration.next(), Some(Stage::CareerExplorer));
        assert_eq!(Stage::AdminSignIn.next(), None);
    }

    #[test]
    fn key_wire_names() {
        assert_eq!(SessionKey::PersonalityUserData.to_string(), "personalityUserData");
        assert_eq!(SessionKey::PersonalityResults.as_str(), "personalityResults");
    }
}

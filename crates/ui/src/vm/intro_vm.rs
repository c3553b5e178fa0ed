use onboard_core::model::Notice;
use services::StageSnapshot;
use services::voice::PlaybackState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub sentence: String,
}

impl IntroVm {
    /// `None` when the snapshot carries no profile.
    #[must_use]
    pub fn from_snapshot(snapshot: &StageSnapshot) -> Option<Self> {
        let profile = snapshot.profile.as_ref()?;
        Some(Self {
            sentence: profile.narration_sentence(),
        })
    }
}

#[must_use]
pub fn playback_status(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Speaking => "Speaking...",
        PlaybackState::Idle | PlaybackState::Completed | PlaybackState::Failed => {
            "Preparing your results..."
        }
    }
}

#[must_use]
pub fn playback_notice(state: PlaybackState) -> Option<Notice> {
    match state {
        PlaybackState::Failed => Some(Notice::error(
            "Could not play the introduction. Continuing to your results...",
        )),
        _ => None,
    }
}

#[must_use]
pub fn unsupported_notice() -> Notice {
    Notice::info("Voice playback is not supported here. Continuing to your results...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::model::{Stage, UserProfile};

    #[test]
    fn sentence_comes_from_profile() {
        let snapshot = StageSnapshot {
            stage: Stage::PersonalityIntro,
            profile: Some(UserProfile::new("Asha", "16", "doctor")),
            results: None,
        };
        let vm = IntroVm::from_snapshot(&snapshot).unwrap();
        assert_eq!(
            vm.sentence,
            "I am Asha, I am 16 years old, and I want to become a doctor."
        );
    }

    #[test]
    fn status_follows_playback() {
        assert_eq!(playback_status(PlaybackState::Speaking), "Speaking...");
        assert_eq!(
            playback_status(PlaybackState::Completed),
            "Preparing your results..."
        );
        assert!(playback_notice(PlaybackState::Failed).is_some());
        assert!(playback_notice(PlaybackState::Completed).is_none());
    }
}

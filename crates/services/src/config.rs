use std::time::Duration;

/// The one locale used for recognition and synthesis.
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Fixed delays around intro narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationTimings {
    /// Lets the intro screen paint before audio starts.
    pub pre_speak: Duration,
    pub after_completed: Duration,
    /// Longer than `after_completed` so the user notices the missing audio.
    pub after_failed: Duration,
    /// Used instead of narration when synthesis is unavailable.
    pub unsupported_fallback: Duration,
}

impl Default for NarrationTimings {
    fn default() -> Self {
        Self {
            pre_speak: Duration::from_millis(500),
            after_completed: Duration::from_millis(800),
            after_failed: Duration::from_millis(2000),
            unsupported_fallback: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

/// Service tunables. Defaults match production behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingConfig {
    pub voice: VoiceSettings,
    pub narration: NarrationTimings,
    /// How long simulated form submissions take.
    pub submit_latency: Duration,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            voice: VoiceSettings::default(),
            narration: NarrationTimings::default(),
            submit_latency: Duration::from_millis(1500),
        }
    }
}

impl OnboardingConfig {
    /// Zero submission latency; handy for tests and demos.
    #[must_use]
    pub fn instant_submissions(mut self) -> Self {
        self.submit_latency = Duration::ZERO;
        self
    }
}

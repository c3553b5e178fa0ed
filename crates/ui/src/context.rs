use std::sync::{Arc, OnceLock};

use services::AppServices;
use services::voice::SpeechCapabilities;

use crate::platform;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// `false` keeps both speech capabilities closed without probing.
    fn speech_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    speech_enabled: bool,
    speech: Arc<OnceLock<SpeechCapabilities>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            speech_enabled: app.speech_enabled(),
            speech: Arc::new(OnceLock::new()),
        }
    }

    /// Probe the webview once and remember the answer.
    pub async fn detect_speech(&self) -> SpeechCapabilities {
        if let Some(known) = self.speech.get() {
            return known.clone();
        }
        let detected = if self.speech_enabled {
            platform::probe_capabilities().await
        } else {
            SpeechCapabilities::none()
        };
        self.speech.get_or_init(|| detected).clone()
    }

    /// Capabilities found by [`detect_speech`](Self::detect_speech); closed until it ran.
    #[must_use]
    pub fn speech(&self) -> SpeechCapabilities {
        self.speech.get().cloned().unwrap_or_default()
    }

    /// Services wired to the detected speech capabilities.
    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone().with_capabilities(self.speech())
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

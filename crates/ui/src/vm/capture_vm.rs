use onboard_core::model::Notice;
use services::CaptureError;

pub const LISTENING_NOTICE: &str = "Listening... Speak your name";

/// Notice for a finished capture that produced no transcript.
///
/// Busy and cancelled captures are silent.
#[must_use]
pub fn capture_notice(err: &CaptureError) -> Option<Notice> {
    match err {
        CaptureError::CapabilityUnavailable | CaptureError::CaptureFailed { .. } => {
            Some(Notice::error(err.to_string()))
        }
        _ => None,
    }
}

#[must_use]
pub fn greeting_notice(name: &str) -> Notice {
    Notice::success(format!("Hello, {name}!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::model::NoticeLevel;

    #[test]
    fn failures_map_to_error_notices() {
        let unsupported = capture_notice(&CaptureError::CapabilityUnavailable).unwrap();
        assert_eq!(unsupported.level, NoticeLevel::Error);
        assert_eq!(
            unsupported.message,
            "Voice input is not supported in your browser"
        );

        let failed = capture_notice(&CaptureError::CaptureFailed {
            reason: "no-speech".into(),
        })
        .unwrap();
        assert_eq!(failed.message, "Could not recognize speech. Please try again.");

        assert_eq!(capture_notice(&CaptureError::Busy), None);
        assert_eq!(capture_notice(&CaptureError::Cancelled), None);
    }

    #[test]
    fn greeting_uses_transcript() {
        assert_eq!(greeting_notice("Asha").message, "Hello, Asha!");
    }
}

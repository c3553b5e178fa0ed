use std::sync::Arc;

use dioxus::document::{Eval, eval};
use dioxus::prelude::spawn;
use serde::{Deserialize, Serialize};
use services::BridgeError;
use services::voice::{
    RecognitionConfig, RecognitionEvent, SpeechCapabilities, SpeechRecognizer, SpeechSynthesizer,
    SynthesisEvent, Utterance,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

const PROBE_SCRIPT: &str = r#"
    return {
        recognition: !!(window.SpeechRecognition || window.webkitSpeechRecognition),
        synthesis: "speechSynthesis" in window,
    };
"#;

const RECOGNITION_SCRIPT: &str = r#"
    const config = await dioxus.recv();
    const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
    if (!Recognition) {
        dioxus.send({ kind: "error", detail: "not-supported" });
        dioxus.send({ kind: "end" });
        return;
    }
    const recognition = new Recognition();
    window.__onboardRecognition = recognition;
    recognition.lang = config.locale;
    recognition.continuous = config.continuous;
    recognition.interimResults = config.interim_results;
    recognition.onstart = () => dioxus.send({ kind: "start" });
    recognition.onresult = (event) =>
        dioxus.send({ kind: "result", detail: event.results[0][0].transcript });
    recognition.onerror = (event) =>
        dioxus.send({ kind: "error", detail: String(event.error || "unknown") });
    recognition.onend = () => {
        if (window.__onboardRecognition === recognition) {
            window.__onboardRecognition = null;
        }
        dioxus.send({ kind: "end" });
    };
    recognition.start();
"#;

const ABORT_RECOGNITION_SCRIPT: &str = r#"
    if (window.__onboardRecognition) {
        window.__onboardRecognition.abort();
        window.__onboardRecognition = null;
    }
"#;

const SYNTHESIS_SCRIPT: &str = r#"
    const payload = await dioxus.recv();
    if (!("speechSynthesis" in window)) {
        dioxus.send({ kind: "error", detail: "not-supported" });
        return;
    }
    const utterance = new SpeechSynthesisUtterance(payload.text);
    utterance.lang = payload.locale;
    utterance.rate = payload.rate;
    utterance.pitch = payload.pitch;
    utterance.onstart = () => dioxus.send({ kind: "start" });
    utterance.onend = () => dioxus.send({ kind: "end" });
    utterance.onerror = (event) =>
        dioxus.send({ kind: "error", detail: String(event.error || "unknown") });
    window.speechSynthesis.speak(utterance);
"#;

const CANCEL_SYNTHESIS_SCRIPT: &str = r#"
    if ("speechSynthesis" in window) {
        window.speechSynthesis.cancel();
    }
"#;

#[derive(Debug, Default, Deserialize)]
struct Probe {
    recognition: bool,
    synthesis: bool,
}

/// Messages posted by the scripts above.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
enum BridgeMessage {
    Start,
    Result(String),
    Error(String),
    End,
}

#[derive(Serialize)]
struct RecognitionPayload<'a> {
    locale: &'a str,
    continuous: bool,
    interim_results: bool,
}

#[derive(Serialize)]
struct UtterancePayload<'a> {
    text: &'a str,
    locale: &'a str,
    rate: f32,
    pitch: f32,
}

/// Ask the webview which speech APIs exist. Any failure counts as "neither".
pub async fn probe_capabilities() -> SpeechCapabilities {
    let probe = match eval(PROBE_SCRIPT).join::<Probe>().await {
        Ok(probe) => probe,
        Err(err) => {
            warn!(error = %err, "speech capability probe failed");
            Probe::default()
        }
    };
    debug!(?probe, "speech capabilities");

    let mut capabilities = SpeechCapabilities::none();
    if probe.recognition {
        capabilities = capabilities.with_recognizer(Arc::new(WebviewRecognizer));
    }
    if probe.synthesis {
        capabilities = capabilities.with_synthesizer(Arc::new(WebviewSynthesizer));
    }
    capabilities
}

/// `SpeechRecognition` in the webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewRecognizer;

impl SpeechRecognizer for WebviewRecognizer {
    fn start(
        &self,
        config: &RecognitionConfig,
        events: UnboundedSender<RecognitionEvent>,
    ) -> Result<(), BridgeError> {
        let script = eval(RECOGNITION_SCRIPT);
        script
            .send(RecognitionPayload {
                locale: &config.locale,
                continuous: config.continuous,
                interim_results: config.interim_results,
            })
            .map_err(|err| BridgeError(err.to_string()))?;

        spawn(pump(script, move |message| {
            let (event, last) = match message {
                BridgeMessage::Start => (RecognitionEvent::Start, false),
                BridgeMessage::Result(text) => (RecognitionEvent::Result(text), false),
                BridgeMessage::Error(reason) => (RecognitionEvent::Error(reason), false),
                BridgeMessage::End => (RecognitionEvent::End, true),
            };
            events.send(event).is_ok() && !last
        }));
        Ok(())
    }

    fn abort(&self) {
        let _ = eval(ABORT_RECOGNITION_SCRIPT);
    }
}

/// `speechSynthesis` in the webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewSynthesizer;

impl SpeechSynthesizer for WebviewSynthesizer {
    fn speak(
        &self,
        utterance: &Utterance,
        events: UnboundedSender<SynthesisEvent>,
    ) -> Result<(), BridgeError> {
        let script = eval(SYNTHESIS_SCRIPT);
        script
            .send(UtterancePayload {
                text: &utterance.text,
                locale: &utterance.locale,
                rate: utterance.rate,
                pitch: utterance.pitch,
            })
            .map_err(|err| BridgeError(err.to_string()))?;

        spawn(pump(script, move |message| match message {
            BridgeMessage::Start => events.send(SynthesisEvent::Start).is_ok(),
            BridgeMessage::End => {
                let _ = events.send(SynthesisEvent::End);
                false
            }
            BridgeMessage::Error(reason) => {
                let _ = events.send(SynthesisEvent::Error(reason));
                false
            }
            BridgeMessage::Result(_) => true,
        }));
        Ok(())
    }

    fn cancel(&self) {
        let _ = eval(CANCEL_SYNTHESIS_SCRIPT);
    }
}

/// Forward script messages to `forward` until it returns `false` or the script dies.
async fn pump(mut script: Eval, mut forward: impl FnMut(BridgeMessage) -> bool) {
    loop {
        match script.recv::<BridgeMessage>().await {
            Ok(message) => {
                if !forward(message) {
                    break;
                }
            }
            Err(err) => {
                debug!(error = %err, "speech bridge closed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_messages_use_kind_and_detail() {
        let start: BridgeMessage = serde_json::from_str(r#"{"kind":"start"}"#).unwrap();
        assert!(matches!(start, BridgeMessage::Start));

        let result: BridgeMessage =
            serde_json::from_str(r#"{"kind":"result","detail":"Asha"}"#).unwrap();
        assert!(matches!(result, BridgeMessage::Result(text) if text == "Asha"));
    }
}

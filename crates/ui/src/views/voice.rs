use std::rc::Rc;

use dioxus::prelude::*;
use onboard_core::model::Notice;
use services::voice::CaptureState;

use crate::context::AppContext;
use crate::views::notices::use_notices;
use crate::vm::{LISTENING_NOTICE, capture_notice};

/// Microphone button that captures one utterance per click.
///
/// The transcript goes to `on_transcript`; failures become notices. Leaving the
/// screen aborts a capture in progress.
#[component]
pub fn MicButton(on_transcript: EventHandler<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_notices();
    let adapter = use_hook(|| Rc::new(ctx.services().capture_adapter()));
    let mut listening = use_signal(|| false);

    {
        let adapter = Rc::clone(&adapter);
        use_future(move || {
            let mut states = adapter.subscribe();
            async move {
                loop {
                    let state = *states.borrow_and_update();
                    listening.set(state == CaptureState::Listening);
                    if states.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }
    {
        let adapter = Rc::clone(&adapter);
        use_drop(move || adapter.cancel());
    }

    let onclick = move |_: MouseEvent| {
        let adapter = Rc::clone(&adapter);
        if adapter.is_available() && !listening() {
            notices.push(Notice::info(LISTENING_NOTICE));
        }
        spawn(async move {
            match adapter.capture().await {
                Ok(transcript) => on_transcript.call(transcript),
                Err(err) => {
                    if let Some(notice) = capture_notice(&err) {
                        notices.push(notice);
                    }
                }
            }
        });
    };

    let listening_now = listening();
    rsx! {
        div { class: "voice",
            button {
                class: if listening_now { "voice-button voice-button--listening" } else { "voice-button" },
                r#type: "button",
                aria_label: "Voice input",
                onclick,
                if listening_now { "🎙" } else { "🎤" }
            }
            p { class: "voice__hint",
                if listening_now { "Listening..." } else { "Click to speak your name" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::use_notices_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_notices_provider();
    // Screens build their speech adapters from the probe result, so routing waits for it.
    let speech = use_resource(move || {
        let ctx = ctx.clone();
        async move { ctx.detect_speech().await }
    });
    let ready = speech.read().is_some();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Career Compass" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if ready {
                    Router::<Route> {}
                } else {
                    p { class: "muted", "Loading..." }
                }
            }
        }
    }
}

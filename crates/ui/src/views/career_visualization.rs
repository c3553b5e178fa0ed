use dioxus::prelude::*;
use dioxus_router::Link;
use onboard_core::model::catalog::{AGE_CATEGORIES, CAREER_PREVIEWS};
use onboard_core::model::{ExplorerDraft, Notice};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;
use crate::views::voice::MicButton;
use crate::vm::greeting_notice;

#[component]
pub fn CareerVisualizationView() -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_notices();
    let session_state = ctx.services().session_state();
    let mut form = use_signal(ExplorerDraft::default);
    let mut show_careers = use_signal(|| false);
    let form_value = form();

    let on_explore = move |_: MouseEvent| match form().validate() {
        Ok(()) => {
            show_careers.set(true);
            notices.push(Notice::success("Showing career paths for you!"));
        }
        Err(err) => notices.push(Notice::error(err.to_string())),
    };

    let on_transcript = move |transcript: String| {
        notices.push(greeting_notice(&transcript));
        form.write().name.clone_from(&transcript);
        let session_state = session_state.clone();
        spawn(async move {
            if let Err(err) = session_state.save_spoken_name(transcript).await {
                warn!(error = %err, "could not save captured name");
            }
        });
    };

    rsx! {
        div { class: "page",
            div { class: "page__header",
                h2 { "Explore your career path" }
                Link { class: "button", to: Route::PersonalityAssessment {}, "Take assessment" }
            }
            div { class: "card card--center",
                p { class: "lead",
                    if form_value.name.trim().is_empty() {
                        "Enter your name or use voice input"
                    } else {
                        "Welcome, "
                        span { class: "accent", "{form_value.name}" }
                        "!"
                    }
                }
                MicButton { on_transcript }
                div { class: "form form--inline",
                    input {
                        placeholder: "Or type your name here...",
                        value: "{form_value.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    select {
                        value: "{form_value.age_category}",
                        onchange: move |evt| form.write().age_category = evt.value(),
                        option { value: "", "Select age group" }
                        for category in AGE_CATEGORIES {
                            option { value: category.value, "{category.label}" }
                        }
                    }
                }
                button { class: "button button--primary", onclick: on_explore, "Explore careers" }
            }
            if show_careers() {
                h3 { class: "section-title", "Recommended careers for you" }
                div { class: "career-grid",
                    for career in CAREER_PREVIEWS {
                        div { class: "card career-card", key: "{career.title}",
                            h4 { "{career.title}" }
                            p { "{career.description}" }
                            div { class: "career-card__meta",
                                span { "{career.salary}" }
                                span { class: "badge", "{career.growth}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

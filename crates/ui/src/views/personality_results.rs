use dioxus::prelude::*;
use dioxus_router::use_navigator;
use onboard_core::model::{Notice, Stage};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::ResultsVm;

#[component]
pub fn PersonalityResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let notices = use_notices();
    let stage_navigator = ctx.services().navigator();

    let resource = {
        let stage_navigator = stage_navigator.clone();
        use_resource(move || {
            let stage_navigator = stage_navigator.clone();
            async move {
                match stage_navigator.enter(Stage::PersonalityResults).await {
                    Ok(snapshot) => match (snapshot.profile, snapshot.results) {
                        (Some(profile), Some(results)) => Ok(ResultsVm::new(&profile, &results)),
                        _ => Err(ViewError::Unknown),
                    },
                    Err(missing) => {
                        navigator.replace(Route::from(missing.redirect));
                        Err(ViewError::MissingState {
                            redirect: missing.redirect,
                        })
                    }
                }
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let start_over = move |_: MouseEvent| {
        let stage_navigator = stage_navigator.clone();
        spawn(async move {
            match stage_navigator.start_over().await {
                Ok(stage) => {
                    navigator.push(Route::from(stage));
                }
                Err(err) => {
                    warn!(error = %err, "could not clear session");
                    notices.push(Notice::error("Could not start over. Please try again."));
                }
            }
        });
    };

    rsx! {
        div { class: "page page--narrow",
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "card",
                        h2 { "Your results, {vm.name}" }
                        p { class: "muted", "Age {vm.age} · Aiming to become a {vm.aim}" }
                        p { class: "lead",
                            "Your strongest trait: "
                            span { class: "accent", "{vm.dominant}" }
                        }
                        div { class: "scores",
                            for row in vm.rows {
                                div {
                                    class: if row.dominant { "score score--dominant" } else { "score" },
                                    key: "{row.label}",
                                    span { class: "score__label", "{row.label}" }
                                    div { class: "score__bar",
                                        div { class: "score__fill", style: "width: {row.percent}%" }
                                    }
                                    span { class: "score__value", "{row.score}" }
                                }
                            }
                        }
                        h3 { "Careers to explore" }
                        ul { class: "career-list",
                            for career in vm.careers.iter() {
                                li { "{career}" }
                            }
                        }
                        button { class: "button", onclick: start_over, "Start over" }
                    }
                },
                ViewState::Error(ViewError::MissingState { .. }) => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
            }
        }
    }
}

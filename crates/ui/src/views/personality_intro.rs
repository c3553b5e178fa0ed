use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use onboard_core::model::Stage;
use services::voice::{PlaybackPlan, PlaybackState};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{IntroVm, playback_notice, playback_status, unsupported_notice};

/// Narrates the user's introduction, then moves on to the results.
#[component]
pub fn PersonalityIntroView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let notices = use_notices();
    let stage_navigator = ctx.services().navigator();
    let controller = use_hook(|| Rc::new(ctx.services().playback_controller()));
    let mut playback = use_signal(PlaybackState::default);

    {
        let controller = Rc::clone(&controller);
        use_drop(move || controller.cancel());
    }
    {
        let controller = Rc::clone(&controller);
        use_future(move || {
            let mut states = controller.subscribe();
            async move {
                loop {
                    let state = *states.borrow_and_update();
                    playback.set(state);
                    if let Some(notice) = playback_notice(state) {
                        notices.push(notice);
                    }
                    if states.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    let resource = {
        let stage_navigator = stage_navigator.clone();
        use_resource(move || {
            let stage_navigator = stage_navigator.clone();
            async move {
                match stage_navigator.enter(Stage::PersonalityIntro).await {
                    Ok(snapshot) => IntroVm::from_snapshot(&snapshot).ok_or(ViewError::Unknown),
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

    {
        let controller = Rc::clone(&controller);
        use_effect(move || {
            let ViewState::Ready(vm) = view_state_from_resource(&resource) else {
                return;
            };
            let controller = Rc::clone(&controller);
            let stage_navigator = stage_navigator.clone();
            spawn(async move {
                if matches!(controller.plan(), PlaybackPlan::SkipWithTimer(_)) {
                    notices.push(unsupported_notice());
                }
                if let Some(next) = stage_navigator.run_narration(&controller, &vm.sentence).await {
                    navigator.push(Route::from(next));
                }
            });
        });
    }

    let speaking = playback() == PlaybackState::Speaking;
    let status = playback_status(playback());

    rsx! {
        div { class: "page page--center",
            match state {
                ViewState::Ready(vm) => rsx! {
                    div { class: "card card--center intro",
                        div { class: if speaking { "speaker speaker--active" } else { "speaker" }, "🔊" }
                        h1 { class: "intro__sentence", "“{vm.sentence}”" }
                        p { class: "muted", "{status}" }
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

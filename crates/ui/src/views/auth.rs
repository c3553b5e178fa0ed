use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use onboard_core::model::{AuthMode, Notice, SignInDraft};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;

#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let notices = use_notices();
    let auth = ctx.services().auth();

    let mut form = use_signal(SignInDraft::default);
    let mut submitting = use_signal(|| false);

    let form_value = form();
    let signing_up = form_value.mode == AuthMode::SignUp;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = auth.clone();
        let draft = form();
        submitting.set(true);
        spawn(async move {
            match auth.sign_in(&draft).await {
                Ok(outcome) => {
                    notices.push(Notice::success(outcome.message()));
                    navigator.push(Route::CareerVisualization {});
                }
                Err(err) => notices.push(Notice::error(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page page--narrow",
            div { class: "card",
                h2 { if signing_up { "Create your account" } else { "Welcome back" } }
                div { class: "tabs",
                    button {
                        r#type: "button",
                        class: if signing_up { "tab" } else { "tab tab--active" },
                        onclick: move |_| form.write().mode = AuthMode::SignIn,
                        "Sign in"
                    }
                    button {
                        r#type: "button",
                        class: if signing_up { "tab tab--active" } else { "tab" },
                        onclick: move |_| form.write().mode = AuthMode::SignUp,
                        "Sign up"
                    }
                }
                form { class: "form", onsubmit,
                    if signing_up {
                        label { r#for: "auth-name", "Full name" }
                        input {
                            id: "auth-name",
                            value: "{form_value.name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label { r#for: "auth-email", "Email" }
                    input {
                        id: "auth-email",
                        r#type: "email",
                        value: "{form_value.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { r#for: "auth-password", "Password" }
                    input {
                        id: "auth-password",
                        r#type: "password",
                        value: "{form_value.password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    if signing_up {
                        label { r#for: "auth-confirm", "Confirm password" }
                        input {
                            id: "auth-confirm",
                            r#type: "password",
                            value: "{form_value.confirm_password}",
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                        }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            "Processing..."
                        } else if signing_up {
                            "Create account"
                        } else {
                            "Sign in"
                        }
                    }
                }
                p { class: "muted",
                    Link { to: Route::Home {}, "Back to home" }
                }
            }
        }
    }
}

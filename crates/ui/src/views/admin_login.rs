use dioxus::prelude::*;
use dioxus_router::Link;
use onboard_core::model::{AdminSignInDraft, Notice};
use services::{ADMIN_DASHBOARD_PENDING, ADMIN_WELCOME};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;

#[component]
pub fn AdminLoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_notices();
    let auth = ctx.services().auth();

    let mut form = use_signal(AdminSignInDraft::default);
    let mut submitting = use_signal(|| false);
    let form_value = form();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = auth.clone();
        let draft = form();
        submitting.set(true);
        spawn(async move {
            match auth.admin_sign_in(&draft).await {
                Ok(()) => {
                    notices.push(Notice::success(ADMIN_WELCOME));
                    notices.push(Notice::info(ADMIN_DASHBOARD_PENDING));
                }
                Err(err) => notices.push(Notice::error(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page page--narrow",
            div { class: "card",
                h2 { "Admin sign in" }
                form { class: "form", onsubmit,
                    label { r#for: "admin-email", "Email" }
                    input {
                        id: "admin-email",
                        r#type: "email",
                        value: "{form_value.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { r#for: "admin-password", "Password" }
                    input {
                        id: "admin-password",
                        r#type: "password",
                        value: "{form_value.password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
                p { class: "muted",
                    Link { to: Route::Home {}, "Back to home" }
                }
            }
        }
    }
}

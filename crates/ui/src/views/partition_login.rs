use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use onboard_core::model::catalog::{GRADES, INSTITUTES, find_institute};
use onboard_core::model::{Notice, RegistrationDraft, Stage};
use services::StageNavigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;

/// Institute registration: issues a student id, then continues to the explorer.
#[component]
pub fn PartitionLoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let notices = use_notices();
    let registration = ctx.services().registration();
    let next_route = continue_route(&ctx.services().navigator());

    let mut form = use_signal(RegistrationDraft::default);
    let mut submitting = use_signal(|| false);
    let mut student_id = use_signal(|| None::<String>);
    let form_value = form();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let registration = registration.clone();
        let draft = form();
        submitting.set(true);
        spawn(async move {
            match registration.register(&draft).await {
                Ok(id) => {
                    student_id.set(Some(id.to_string()));
                    notices.push(Notice::success("Student ID generated successfully!"));
                }
                Err(err) => notices.push(Notice::error(err.to_string())),
            }
            submitting.set(false);
        });
    };

    if let Some(id) = student_id() {
        let institute = find_institute(&form_value.institute)
            .map_or(form_value.institute.as_str(), |inst| inst.name);
        return rsx! {
            div { class: "page page--narrow",
                div { class: "card card--success",
                    h2 { "Registration complete" }
                    p { "Your student ID" }
                    p { class: "student-id", "{id}" }
                    p { class: "muted", "{form_value.name} · {institute} · Grade {form_value.grade}" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| {
                            navigator.push(next_route.clone());
                        },
                        "Continue to career explorer"
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page page--narrow",
            div { class: "card",
                h2 { "Institute registration" }
                form { class: "form", onsubmit,
                    label { r#for: "reg-institute", "Institute" }
                    select {
                        id: "reg-institute",
                        value: "{form_value.institute}",
                        onchange: move |evt| form.write().institute = evt.value(),
                        option { value: "", "Select your institute" }
                        for institute in INSTITUTES {
                            option { value: institute.code, "{institute.name}" }
                        }
                    }
                    label { r#for: "reg-grade", "Grade" }
                    select {
                        id: "reg-grade",
                        value: "{form_value.grade}",
                        onchange: move |evt| form.write().grade = evt.value(),
                        option { value: "", "Select your grade" }
                        for grade in GRADES {
                            option { value: grade, "Grade {grade}" }
                        }
                    }
                    label { r#for: "reg-name", "Student name" }
                    input {
                        id: "reg-name",
                        value: "{form_value.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    label { r#for: "reg-email", "Email" }
                    input {
                        id: "reg-email",
                        r#type: "email",
                        value: "{form_value.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { r#for: "reg-phone", "Phone (optional)" }
                    input {
                        id: "reg-phone",
                        r#type: "tel",
                        value: "{form_value.phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Generating ID..." } else { "Generate student ID" }
                    }
                }
                p { class: "muted",
                    Link { to: Route::Home {}, "Back to home" }
                }
            }
        }
    }
}

/// Where "Continue" leads once a student id has been issued.
fn continue_route(stages: &StageNavigator) -> Route {
    stages
        .advance(Stage::InstituteRegistration)
        .map_or(Route::Home {}, Route::from)
}

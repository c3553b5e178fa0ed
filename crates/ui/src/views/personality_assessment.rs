use dioxus::prelude::*;
use dioxus_router::use_navigator;
use onboard_core::model::{AssessmentAnswers, Notice, ProfileDraft, Stage};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notices::use_notices;
use crate::views::voice::MicButton;
use crate::vm::{greeting_notice, map_questions};

/// Collects identity and questionnaire answers; produces both session keys.
#[component]
pub fn PersonalityAssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let notices = use_notices();
    let services = ctx.services();
    let assessment = services.assessment();
    let session_state = services.session_state();
    let stage_navigator = services.navigator();

    let mut draft = use_signal(ProfileDraft::default);
    let mut answers = use_signal(AssessmentAnswers::new);
    let mut submitting = use_signal(|| false);

    {
        let session_state = session_state.clone();
        use_future(move || {
            let session_state = session_state.clone();
            async move {
                match session_state.profile().await {
                    Ok(Some(profile)) => {
                        let mut next = draft();
                        if next.name.is_empty() {
                            next.name = profile.name;
                        }
                        if next.age.is_empty() {
                            next.age = profile.age;
                        }
                        if next.aim.is_empty() {
                            next.aim = profile.aim;
                        }
                        draft.set(next);
                    }
                    Ok(None) => {}
                    Err(err) => warn!(error = %err, "could not load saved profile"),
                }
            }
        });
    }

    let on_transcript = move |transcript: String| {
        notices.push(greeting_notice(&transcript));
        draft.write().name.clone_from(&transcript);
        let session_state = session_state.clone();
        spawn(async move {
            if let Err(err) = session_state.save_spoken_name(transcript).await {
                warn!(error = %err, "could not save captured name");
            }
        });
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let assessment = assessment.clone();
        let stage_navigator = stage_navigator.clone();
        let (profile, choices) = (draft(), answers());
        submitting.set(true);
        spawn(async move {
            match assessment.submit(&profile, &choices).await {
                Ok(_) => {
                    if let Some(next) = stage_navigator.advance(Stage::PersonalityAssessment) {
                        navigator.push(Route::from(next));
                    }
                }
                Err(err) => notices.push(Notice::error(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let draft_value = draft();
    let answers_value = answers();
    let questions = map_questions(&answers_value);
    let remaining = answers_value.unanswered();

    rsx! {
        div { class: "page page--narrow",
            div { class: "card",
                h2 { "Personality assessment" }
                p { class: "muted", "Tell us about yourself, then answer five quick questions." }
                form { class: "form", onsubmit,
                    label { r#for: "pa-name", "Your name" }
                    div { class: "form__row",
                        input {
                            id: "pa-name",
                            value: "{draft_value.name}",
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                        MicButton { on_transcript }
                    }
                    label { r#for: "pa-age", "Your age" }
                    input {
                        id: "pa-age",
                        r#type: "number",
                        min: "5",
                        max: "99",
                        value: "{draft_value.age}",
                        oninput: move |evt| draft.write().age = evt.value(),
                    }
                    label { r#for: "pa-aim", "What do you want to become?" }
                    input {
                        id: "pa-aim",
                        placeholder: "e.g. doctor, engineer, designer",
                        value: "{draft_value.aim}",
                        oninput: move |evt| draft.write().aim = evt.value(),
                    }

                    for question in questions {
                        fieldset { class: "question", key: "{question.index}",
                            legend { "{question.number}. {question.prompt}" }
                            for (option, label) in question.options.iter().copied() {
                                label { class: "question__option",
                                    input {
                                        r#type: "radio",
                                        name: "question-{question.index}",
                                        checked: question.selected == Some(option),
                                        onchange: {
                                            let index = question.index;
                                            move |_| {
                                                if let Err(err) = answers.write().answer(index, option) {
                                                    warn!(error = %err, "invalid answer");
                                                }
                                            }
                                        },
                                    }
                                    span { "{label}" }
                                }
                            }
                        }
                    }

                    p { class: "muted",
                        if remaining == 0 {
                            "All questions answered."
                        } else {
                            "{remaining} question(s) left."
                        }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "See my introduction" }
                    }
                }
            }
        }
    }
}

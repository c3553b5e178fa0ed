use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                h1 { "Discover the career that fits ", span { class: "accent", "you" } }
                p { class: "hero__lead",
                    "Register with your institute, explore career paths by voice, and take a short personality assessment."
                }
                div { class: "hero__actions",
                    Link { class: "button button--primary", to: Route::PersonalityAssessment {}, "Take the assessment" }
                    Link { class: "button", to: Route::CareerVisualization {}, "Explore careers" }
                }
            }
            section { class: "entry-grid",
                EntryCard {
                    title: "Students",
                    body: "Sign in or create an account to save your progress.",
                    to: Route::Auth {},
                    cta: "Sign in",
                }
                EntryCard {
                    title: "Institutes",
                    body: "Register a student with their school and grade to get a student ID.",
                    to: Route::PartitionLogin {},
                    cta: "Register",
                }
                EntryCard {
                    title: "Administrators",
                    body: "Manage institutes and students.",
                    to: Route::AdminLogin {},
                    cta: "Admin sign in",
                }
            }
        }
    }
}

#[component]
fn EntryCard(title: &'static str, body: &'static str, to: Route, cta: &'static str) -> Element {
    rsx! {
        div { class: "card entry-card",
            h3 { "{title}" }
            p { "{body}" }
            Link { class: "button", to, "{cta}" }
        }
    }
}

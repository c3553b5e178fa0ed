use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use onboard_core::model::Stage;

use crate::views::{
    AdminLoginView, AuthView, CareerVisualizationView, HomeView, NoticeStack, PartitionLoginView,
    PersonalityAssessmentView, PersonalityIntroView, PersonalityResultsView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/auth", AuthView)] Auth {},
        #[route("/admin-login", AdminLoginView)] AdminLogin {},
        #[route("/partition-login", PartitionLoginView)] PartitionLogin {},
        #[route("/career-visualization", CareerVisualizationView)] CareerVisualization {},
        #[route("/personality-assessment", PersonalityAssessmentView)] PersonalityAssessment {},
        #[route("/personality-intro", PersonalityIntroView)] PersonalityIntro {},
        #[route("/personality-results", PersonalityResultsView)] PersonalityResults {},
}

impl From<Stage> for Route {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Home => Route::Home {},
            Stage::SignIn => Route::Auth {},
            Stage::AdminSignIn => Route::AdminLogin {},
            Stage::InstituteRegistration => Route::PartitionLogin {},
            Stage::CareerExplorer => Route::CareerVisualization {},
            Stage::PersonalityAssessment => Route::PersonalityAssessment {},
            Stage::PersonalityIntro => Route::PersonalityIntro {},
            Stage::PersonalityResults => Route::PersonalityResults {},
        }
    }
}

impl Route {
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Route::Home {} => Stage::Home,
            Route::Auth {} => Stage::SignIn,
            Route::AdminLogin {} => Stage::AdminSignIn,
            Route::PartitionLogin {} => Stage::InstituteRegistration,
            Route::CareerVisualization {} => Stage::CareerExplorer,
            Route::PersonalityAssessment {} => Stage::PersonalityAssessment,
            Route::PersonalityIntro {} => Stage::PersonalityIntro,
            Route::PersonalityResults {} => Stage::PersonalityResults,
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "Career", span { class: "accent", "Compass" } }
                nav {
                    Link { to: Route::CareerVisualization {}, "Explore" }
                    Link { to: Route::PersonalityAssessment {}, "Assessment" }
                    Link { to: Route::Auth {}, "Sign in" }
                }
            }
            NoticeStack {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

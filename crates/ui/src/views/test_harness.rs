use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use onboard_core::time::fixed_now;
use services::{AppServices, Clock, NarrationTimings, OnboardingConfig, SessionStateService};
use services::voice::SpeechCapabilities;
use storage::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{
    AdminLoginView, AuthView, CareerVisualizationView, HomeView, NoticeStack, PartitionLoginView,
    PersonalityAssessmentView, PersonalityIntroView, PersonalityResultsView, use_notices_provider,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn speech_enabled(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Auth,
    AdminLogin,
    PartitionLogin,
    CareerVisualization,
    PersonalityAssessment,
    PersonalityIntro,
    PersonalityResults,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    use_notices_provider();
    rsx! {
        NoticeStack {}
        Router::<TestRoute> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::AdminLogin => rsx! { AdminLoginView {} },
        ViewKind::PartitionLogin => rsx! { PartitionLoginView {} },
        ViewKind::CareerVisualization => rsx! { CareerVisualizationView {} },
        ViewKind::PersonalityAssessment => rsx! { PersonalityAssessmentView {} },
        ViewKind::PersonalityIntro => rsx! { PersonalityIntroView {} },
        ViewKind::PersonalityResults => rsx! { PersonalityResultsView {} },
    }
}

/// Stands in for every real route so navigation away from the view under test
/// is observable in the rendered HTML.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { p { class: "navigated", "navigated:/{path}" } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub state: SessionStateService,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until `done` holds for the rendered HTML, or give up.
    pub async fn drive_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..40 {
            let html = self.render();
            if done(&html) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Short narration delays so the unsupported-speech timer fires within a test.
pub fn fast_config() -> OnboardingConfig {
    let mut config = OnboardingConfig::default().instant_submissions();
    config.narration = NarrationTimings {
        pre_speak: Duration::from_millis(5),
        after_completed: Duration::from_millis(5),
        after_failed: Duration::from_millis(5),
        unsupported_fallback: Duration::from_millis(30),
    };
    config
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::new(
        &storage,
        Clock::fixed(fixed_now()),
        fast_config(),
        SpeechCapabilities::none(),
    );
    let state = services.session_state();

    let app: Arc<dyn UiApp> = Arc::new(TestApp { services });
    let context = build_app_context(&app);
    context.detect_speech().await;

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { context, view });

    ViewHarness { dom, state }
}

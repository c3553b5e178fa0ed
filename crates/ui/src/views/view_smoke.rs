use std::sync::Arc;

use async_trait::async_trait;
use onboard_core::model::{AssessmentAnswers, AssessmentResults, SessionKey, UserProfile};
use onboard_core::time::fixed_now;
use storage::{SessionStore, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn results() -> AssessmentResults {
    let mut answers = AssessmentAnswers::new();
    for (question, option) in [1, 1, 1, 0, 2].into_iter().enumerate() {
        answers.answer(question, option).expect("valid answer");
    }
    AssessmentResults::score(&answers, fixed_now()).expect("complete answers")
}

struct UnreadableStore;

#[async_trait]
impl SessionStore for UnreadableStore {
    async fn set_raw(&self, _key: SessionKey, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn get_raw(&self, _key: SessionKey) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn remove(&self, _key: SessionKey) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_links_every_entry_point() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();

    for expected in ["Take the assessment", "Explore careers", "Sign in", "Register", "Admin sign in"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn sign_in_view_starts_in_sign_in_mode() {
    let mut harness = setup_view_harness(ViewKind::Auth).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome back"), "{html}");
    assert!(!html.contains("Confirm password"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_renders_credentials_form() {
    let mut harness = setup_view_harness(ViewKind::AdminLogin).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Admin sign in"), "{html}");
    assert!(html.contains("admin-password"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn registration_view_lists_institutes_and_grades() {
    let mut harness = setup_view_harness(ViewKind::PartitionLogin).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Select your institute"), "{html}");
    assert!(html.contains("Grade 12"), "{html}");
    assert!(html.contains("Generate student ID"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explorer_hides_previews_until_submitted() {
    let mut harness = setup_view_harness(ViewKind::CareerVisualization).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Explore your career path"), "{html}");
    assert!(html.contains("Select age group"), "{html}");
    assert!(!html.contains("career-grid"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_renders_all_questions_with_voice_input() {
    let mut harness = setup_view_harness(ViewKind::PersonalityAssessment).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("How do you like to spend a free afternoon?"), "{html}");
    assert!(html.contains("How do you usually make decisions?"), "{html}");
    assert!(html.contains("5 question(s) left."), "{html}");
    assert!(html.contains("Click to speak your name"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_prefills_stored_profile() {
    let mut harness = setup_view_harness(ViewKind::PersonalityAssessment).await;
    harness
        .state
        .save_profile(&UserProfile::new("Asha", "16", "doctor"))
        .await
        .expect("save profile");

    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("Asha")).await;
    assert!(html.contains("doctor"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_shows_dominant_trait_for_seeded_session() {
    let mut harness = setup_view_harness(ViewKind::PersonalityResults).await;
    harness
        .state
        .save_profile(&UserProfile::new("Asha", "16", "doctor"))
        .await
        .expect("save profile");
    harness.state.save_results(&results()).await.expect("save results");

    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("Your results")).await;

    assert!(html.contains("Your results, Asha"), "{html}");
    assert!(html.contains("Creative"), "{html}");
    assert!(html.contains("Start over"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_redirects_to_assessment_without_state() {
    let mut harness = setup_view_harness(ViewKind::PersonalityResults).await;
    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("navigated:")).await;

    assert!(html.contains("navigated:/personality-assessment"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_view_narrates_then_moves_on_without_speech() {
    let mut harness = setup_view_harness(ViewKind::PersonalityIntro).await;
    harness
        .state
        .save_profile(&UserProfile::new("Asha", "16", "doctor"))
        .await
        .expect("save profile");
    harness.state.save_results(&results()).await.expect("save results");

    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("I am Asha")).await;
    assert!(
        html.contains("I am Asha, I am 16 years old, and I want to become a doctor."),
        "{html}"
    );
    assert!(html.contains("Voice playback is not supported here"), "{html}");

    let html = harness.drive_until(|html| html.contains("navigated:")).await;
    assert!(html.contains("navigated:/personality-results"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_view_treats_unreadable_store_as_missing_state() {
    let storage = Storage {
        session: Arc::new(UnreadableStore),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::PersonalityIntro, storage).await;
    harness.rebuild();
    let html = harness.drive_until(|html| html.contains("navigated:")).await;

    assert!(html.contains("navigated:/personality-assessment"), "{html}");
}

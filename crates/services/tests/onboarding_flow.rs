use std::sync::Arc;
use std::time::Duration;

use onboard_core::model::{
    AssessmentAnswers, ProfileDraft, RegistrationDraft, SessionKey, Stage, UserProfile,
};
use onboard_core::time::fixed_now;
use services::voice::{RecognitionConfig, RecognitionEvent, SpeechCapabilities, SpeechRecognizer};
use services::{AppServices, BridgeError, Clock, OnboardingConfig};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

/// Hears one fixed name.
struct NameRecognizer(&'static str);

impl SpeechRecognizer for NameRecognizer {
    fn start(
        &self,
        _config: &RecognitionConfig,
        events: UnboundedSender<RecognitionEvent>,
    ) -> Result<(), BridgeError> {
        let name = self.0.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = events.send(RecognitionEvent::Start);
            tokio::time::sleep(Duration::from_millis(200)).await;
            let _ = events.send(RecognitionEvent::Result(name));
            let _ = events.send(RecognitionEvent::End);
        });
        Ok(())
    }

    fn abort(&self) {}
}

fn services() -> AppServices {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    AppServices::in_memory(
        Clock::fixed(fixed_now()),
        OnboardingConfig::default().instant_submissions(),
        SpeechCapabilities::none(),
    )
}

#[tokio::test]
async fn registration_issues_an_institute_scoped_id() {
    let services = services();
    let draft = RegistrationDraft {
        institute: "KV".into(),
        grade: "10".into(),
        name: "Asha".into(),
        email: "asha@example.com".into(),
        phone: String::new(),
    };

    let id = services.registration().register(&draft).await.unwrap();
    let id = id.to_string();

    assert!(id.starts_with("K_10_"), "{id}");
    let tail = &id["K_10_".len()..];
    assert_eq!(tail.len(), 4);
    assert!(matches!(tail.as_bytes()[0], b'A'..=b'D'));
    assert!(tail[1..].bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(
        services.navigator().advance(Stage::InstituteRegistration),
        Some(Stage::CareerExplorer)
    );
}

#[tokio::test(start_paused = true)]
async fn assessment_unlocks_intro_and_narration_falls_back_to_timer() {
    let services = services();
    let navigator = services.navigator();

    let redirect = navigator.enter(Stage::PersonalityIntro).await.unwrap_err();
    assert_eq!(redirect.redirect, Stage::PersonalityAssessment);

    // A voice-captured name lands in the store before the rest of the form.
    services
        .session_state()
        .save_spoken_name("Asha".into())
        .await
        .unwrap();
    assert!(navigator.enter(Stage::PersonalityIntro).await.is_err());

    let mut answers = AssessmentAnswers::new();
    for question in 0..5 {
        answers.answer(question, question % 4).unwrap();
    }
    let draft = ProfileDraft {
        name: "Asha".into(),
        age: "16".into(),
        aim: "doctor".into(),
    };
    services.assessment().submit(&draft, &answers).await.unwrap();
    assert_eq!(
        navigator.advance(Stage::PersonalityAssessment),
        Some(Stage::PersonalityIntro)
    );

    let snapshot = navigator.enter(Stage::PersonalityIntro).await.unwrap();
    let profile = snapshot.profile.unwrap();
    assert_eq!(profile, UserProfile::new("Asha", "16", "doctor"));

    let controller = services.playback_controller();
    let started = Instant::now();
    let next = navigator
        .run_narration(&controller, &profile.narration_sentence())
        .await;
    assert_eq!(next, Some(Stage::PersonalityResults));
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(3000) && elapsed < Duration::from_millis(3005));

    assert!(navigator.enter(Stage::PersonalityResults).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn captured_name_is_written_to_session_state() {
    let services = services()
        .with_capabilities(SpeechCapabilities::none().with_recognizer(Arc::new(NameRecognizer("Asha"))));
    let state = services.session_state();
    state
        .save_profile(&UserProfile::new("", "16", "doctor"))
        .await
        .unwrap();

    let transcript = services.capture_adapter().capture().await.unwrap();
    state.save_spoken_name(transcript).await.unwrap();

    assert_eq!(
        state.profile().await.unwrap(),
        Some(UserProfile::new("Asha", "16", "doctor"))
    );
}

#[tokio::test]
async fn start_over_clears_every_key() {
    let services = services();
    let state = services.session_state();
    state
        .save_profile(&UserProfile::new("Ravi", "15", "pilot"))
        .await
        .unwrap();

    let stage = services.navigator().start_over().await.unwrap();

    assert_eq!(stage, Stage::Home);
    assert_eq!(state.profile().await.unwrap(), None);
    let err = services
        .navigator()
        .enter(Stage::PersonalityResults)
        .await
        .unwrap_err();
    assert_eq!(err.missing, SessionKey::ALL.to_vec());
}

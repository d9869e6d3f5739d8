use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lernplan_core::model::{Completion, LessonPart, ParsedQuiz, lesson_for_day};
use lernplan_core::time::fixed_now;
use reqwest::StatusCode;
use services::generation::{GenerationBackend, GenerationRequest, LESSON_FAILED, QUIZ_FAILED};
use services::{AppConfig, AppServices, AuthOutcome, Clock, ConfigIssue, GenerationError};
use storage::repository::Storage;

/// Replays scripted results and counts how often it was called.
struct ScriptedBackend {
    configured: bool,
    script: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: AtomicU32,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

const SECRETS: &str = r#"
gemini_api_key = "test-key"

[static_users]
SMA = "geheim"

[user_names]
SMA = "Sara"
"#;

fn unavailable() -> Result<String, GenerationError> {
    Err(GenerationError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE))
}

async fn services_with(backend: Arc<ScriptedBackend>) -> AppServices {
    let config = AppConfig::from_toml_str(SECRETS).unwrap();
    AppServices::from_storage(
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        &config,
        backend,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn login_then_record_progress_for_today() {
    let services = services_with(ScriptedBackend::new(vec![])).await;

    let outcome = services
        .credentials()
        .authenticate("sma", "geheim")
        .await
        .unwrap();
    let AuthOutcome::Authenticated(user) = outcome else {
        panic!("expected login to succeed");
    };
    assert_eq!(services.display_names().display_name(&user), "Sara");

    let progress = services.progress();
    let today = progress.today();
    progress
        .mark_complete(&user, today, LessonPart::Lesson)
        .await
        .unwrap();
    progress
        .mark_complete(&user, today, LessonPart::Quiz)
        .await
        .unwrap();

    let overview = progress.month_overview(&user, 2023, 11).await.unwrap();
    assert_eq!(overview.completion_on(today), Completion::Complete);
    assert!(services.config_issues().is_empty());
}

#[tokio::test]
async fn generated_lesson_is_memoized_until_reset() {
    let backend = ScriptedBackend::new(vec![
        Ok("## 1. Grammatik & Erklärung".into()),
        Ok("fresh".into()),
    ]);
    let services = services_with(Arc::clone(&backend)).await;
    let content = services.content();
    let lesson = lesson_for_day(1).unwrap();

    let first = content
        .generate_lesson(lesson.topic, lesson.grammar, lesson.vocabulary)
        .await;
    let second = content
        .generate_lesson(lesson.topic, lesson.grammar, lesson.vocabulary)
        .await;
    assert_eq!(first, second);
    assert_eq!(backend.calls(), 1);

    content.clear_cache();
    let third = content
        .generate_lesson(lesson.topic, lesson.grammar, lesson.vocabulary)
        .await;
    assert_eq!(third.text(), "fresh");
    assert_eq!(backend.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn three_transient_failures_yield_the_sentinel_after_seven_seconds() {
    let backend = ScriptedBackend::new(vec![unavailable(), unavailable(), unavailable()]);
    let services = services_with(Arc::clone(&backend)).await;
    let started = tokio::time::Instant::now();

    let quiz = services.content().generate_quiz("Numbers", "zählen").await;

    assert_eq!(quiz.text(), QUIZ_FAILED);
    assert!(quiz.failure_reason().is_some());
    assert_eq!(backend.calls(), 3);
    assert_eq!(started.elapsed(), Duration::from_secs(7));
    assert_eq!(services.content().cached_len(), 0);
}

#[tokio::test(start_paused = true)]
async fn failures_are_not_cached() {
    let backend = ScriptedBackend::new(vec![
        unavailable(),
        unavailable(),
        unavailable(),
        Ok("1. Ich _____ (sein) müde.\nAntworten:\n1. bin".into()),
    ]);
    let services = services_with(Arc::clone(&backend)).await;
    let content = services.content();

    let failed = content.generate_quiz("Verbs", "sein").await;
    assert!(!failed.is_ready());

    let retried = content.generate_quiz("Verbs", "sein").await;
    assert!(retried.is_ready());
    assert_eq!(
        ParsedQuiz::parse(retried.text()),
        ParsedQuiz::Split {
            questions: "1. Ich _____ (sein) müde.".into(),
            answers: "1. bin".into(),
        }
    );
    assert_eq!(backend.calls(), 4);
}

#[tokio::test]
async fn missing_api_key_short_circuits() {
    let backend = ScriptedBackend::unconfigured();
    let config = AppConfig::from_toml_str("[static_users]\nSMA = \"geheim\"\n").unwrap();
    let services = AppServices::from_storage(
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        &config,
        Arc::clone(&backend) as Arc<dyn GenerationBackend>,
    )
    .await
    .unwrap();

    let lesson = services.content().generate_lesson("t", "g", "v").await;
    assert_eq!(lesson.text(), LESSON_FAILED);
    assert_eq!(backend.calls(), 0);
    assert_eq!(services.config_issues(), &[ConfigIssue::MissingApiKey]);
}

#[tokio::test]
async fn sqlite_services_seed_users_once() {
    let config = AppConfig::from_toml_str(SECRETS).unwrap();
    let url = "sqlite:file:memdb_services_seed?mode=memory&cache=shared";
    let first = AppServices::new_sqlite(url, Clock::fixed(fixed_now()), &config)
        .await
        .unwrap();
    let second = AppServices::new_sqlite(url, Clock::fixed(fixed_now()), &config)
        .await
        .unwrap();

    for services in [first, second] {
        let outcome = services
            .credentials()
            .authenticate("SMA", "geheim")
            .await
            .unwrap();
        assert!(outcome.user().is_some());
    }
}

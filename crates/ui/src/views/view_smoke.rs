use lernplan_core::model::{LessonPart, SessionState};
use lernplan_core::time::fixed_now;
use storage::repository::ProgressRepository;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_session, test_user,
};

const QUIZ_REPLY: &str = "1. Ich _____ (sein) müde.\n\nAntworten:\n1. bin";

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness_with_session(
        ViewKind::Login,
        SessionState::new(),
        Some("unused"),
    )
    .await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Login to Dein Deutschlehrer"), "missing title in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("type=\"password\""), "missing password field in {html}");
    assert!(!html.contains("Invalid Username"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_generated_markdown() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson,
        1,
        Some("## 1. Grammatik & Erklärung\n\nHallo **Welt**"),
    )
    .await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Focus: Introduction"), "missing focus in {html}");
    assert!(html.contains("<strong>Welt</strong>"), "missing lesson body in {html}");
    assert!(html.contains("Mark Lesson Complete"), "missing button in {html}");
    assert!(html.contains("Actionable Practice:"), "missing activity in {html}");
    assert!(!html.contains("marked complete for today"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_shows_recorded_progress() {
    let mut harness = setup_view_harness(ViewKind::Lesson, 1, Some("Inhalt")).await;
    harness
        .storage
        .progress
        .set_part(&test_user(), fixed_now().date_naive(), LessonPart::Lesson, true)
        .await
        .expect("record lesson");

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Lesson marked complete for today!"),
        "missing notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_hides_answers_behind_disclosure() {
    let mut harness = setup_view_harness(ViewKind::Quiz, 7, Some(QUIZ_REPLY)).await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Practice for Day 7: Personal Information"), "missing heading in {html}");
    assert!(html.contains("Show Answers (Antworten)"), "missing disclosure in {html}");
    assert!(html.contains("bin"), "missing answers in {html}");
    assert!(!html.contains("failed to separate"), "unexpected warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_warns_on_missing_separator() {
    let mut harness = setup_view_harness(ViewKind::Quiz, 1, Some("1. Nur eine Frage")).await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("failed to separate questions and answers"), "missing warning in {html}");
    assert!(html.contains("Nur eine Frage"), "missing raw quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_sentinel_without_api_key() {
    let mut harness = setup_view_harness(ViewKind::Quiz, 1, None).await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz generation failed."), "missing sentinel in {html}");
    assert_eq!(harness.services.content().cached_len(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn plan_view_smoke_highlights_current_row() {
    let mut harness = setup_view_harness(ViewKind::Plan, 45, Some("unused")).await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Phase 1: The Basics"), "missing phase 1 in {html}");
    assert!(html.contains("Phase 3: Consolidation"), "missing phase 3 in {html}");
    assert_eq!(html.matches("class=\"current\"").count(), 1, "expected one highlighted row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_renders_greeting_metric_and_calendar() {
    let mut harness = setup_view_harness(ViewKind::Sidebar, 20, Some("unused")).await;
    let today = fixed_now().date_naive();
    for part in [LessonPart::Lesson, LessonPart::Quiz] {
        harness
            .storage
            .progress
            .set_part(&test_user(), today, part, true)
            .await
            .expect("record progress");
    }

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome, Sara"), "missing greeting in {html}");
    assert!(html.contains("Total Days Remaining"), "missing metric in {html}");
    assert!(html.contains(">100<"), "missing remaining days in {html}");
    assert!(html.contains("November 2023"), "missing calendar title in {html}");
    assert!(html.contains("✅"), "missing completion icon in {html}");
    assert!(html.contains("calendar-cell complete today"), "missing today marker in {html}");
    assert!(html.contains("Progress stored for user: SMA"), "missing caption in {html}");
}

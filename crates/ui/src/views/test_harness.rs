use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lernplan_core::model::{SessionState, StudyDay, UserId};
use lernplan_core::time::fixed_now;
use services::generation::{GenerationBackend, GenerationRequest};
use services::{AppConfig, AppServices, Clock, GenerationError};
use storage::repository::Storage;

use crate::context::{UiApp, UiSession, build_app_context};
use crate::views::{LessonView, LoginView, PlanView, QuizView, Sidebar};

const TEST_SECRETS: &str = r#"
gemini_api_key = "test-key"

[static_users]
SMA = "geheim"

[user_names]
SMA = "Sara"
"#;

/// Answers every prompt with the same text, or is unconfigured when `None`.
struct StubBackend {
    reply: Option<String>,
}

#[async_trait]
impl GenerationBackend for StubBackend {
    fn is_configured(&self) -> bool {
        self.reply.is_some()
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.reply.clone().ok_or(GenerationError::MissingApiKey)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Lesson,
    Quiz,
    Plan,
    Sidebar,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    session: SessionState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| UiSession::new(props.session.clone()));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Lesson => rsx! { LessonView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Plan => rsx! { PlanView {} },
        ViewKind::Sidebar => rsx! { Sidebar { user: test_user() } },
    }
}

pub fn test_user() -> UserId {
    UserId::parse("sma").expect("valid user")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let every pending resource resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..6 {
            self.drive_async().await;
        }
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

/// Harness with a logged-in test user on `study_day`.
pub async fn setup_view_harness(
    view: ViewKind,
    study_day: u16,
    reply: Option<&str>,
) -> ViewHarness {
    let mut session = SessionState::new();
    if view != ViewKind::Login {
        session.login(test_user()).expect("fresh session");
    }
    session.set_study_day(StudyDay::new(i64::from(study_day)).expect("valid study day"));
    setup_view_harness_with_session(view, session, reply).await
}

pub async fn setup_view_harness_with_session(
    view: ViewKind,
    session: SessionState,
    reply: Option<&str>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let config = AppConfig::from_toml_str(TEST_SECRETS).expect("test secrets");
    let backend: Arc<dyn GenerationBackend> = Arc::new(StubBackend {
        reply: reply.map(str::to_string),
    });
    let services = Arc::new(
        AppServices::from_storage(storage.clone(), Clock::fixed(fixed_now()), &config, backend)
            .await
            .expect("services"),
    );

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
            session,
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
    }
}

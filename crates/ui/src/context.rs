use std::sync::Arc;

use dioxus::prelude::*;
use lernplan_core::model::SessionState;
use services::{
    AppServices, ConfigIssue, ContentGenerator, CredentialService, DisplayNames, ProgressService,
};

pub trait UiApp: Send + Sync {
    fn credentials(&self) -> Arc<CredentialService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn content(&self) -> Arc<ContentGenerator>;
    fn display_names(&self) -> Arc<DisplayNames>;
    fn config_issues(&self) -> Vec<ConfigIssue>;
}

impl UiApp for AppServices {
    fn credentials(&self) -> Arc<CredentialService> {
        AppServices::credentials(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        AppServices::progress(self)
    }

    fn content(&self) -> Arc<ContentGenerator> {
        AppServices::content(self)
    }

    fn display_names(&self) -> Arc<DisplayNames> {
        AppServices::display_names(self)
    }

    fn config_issues(&self) -> Vec<ConfigIssue> {
        AppServices::config_issues(self).to_vec()
    }
}

#[derive(Clone)]
pub struct AppContext {
    credentials: Arc<CredentialService>,
    progress: Arc<ProgressService>,
    content: Arc<ContentGenerator>,
    display_names: Arc<DisplayNames>,
    config_issues: Arc<[ConfigIssue]>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            credentials: app.credentials(),
            progress: app.progress(),
            content: app.content(),
            display_names: app.display_names(),
            config_issues: app.config_issues().into(),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Arc<CredentialService> {
        Arc::clone(&self.credentials)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentGenerator> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn display_names(&self) -> Arc<DisplayNames> {
        Arc::clone(&self.display_names)
    }

    #[must_use]
    pub fn config_issues(&self) -> &[ConfigIssue] {
        &self.config_issues
    }

    #[must_use]
    pub fn has_issue(&self, issue: ConfigIssue) -> bool {
        self.config_issues.contains(&issue)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Process-scoped session plus counters that views watch to refetch.
///
/// `progress_revision` moves whenever a completion flag is written and
/// `content_revision` whenever the generation cache is cleared.
#[derive(Clone, Copy)]
pub struct UiSession {
    pub state: Signal<SessionState>,
    pub progress_revision: Signal<u64>,
    pub content_revision: Signal<u64>,
}

impl UiSession {
    /// Must be called from inside a component scope.
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self {
            state: Signal::new(state),
            progress_revision: Signal::new(0),
            content_revision: Signal::new(0),
        }
    }

    pub fn progress_changed(&mut self) {
        *self.progress_revision.write() += 1;
    }

    pub fn content_reset(&mut self) {
        *self.content_revision.write() += 1;
    }
}

#[must_use]
pub fn use_ui_session() -> UiSession {
    use_context::<UiSession>()
}

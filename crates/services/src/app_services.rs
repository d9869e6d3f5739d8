use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::auth_service::CredentialService;
use crate::config::{AppConfig, ConfigIssue, DisplayNames};
use crate::error::AppServicesError;
use crate::generation::{ContentGenerator, GeminiBackend, GenerationBackend};
use crate::progress_service::ProgressService;

/// Assembles app-facing services from storage and configuration.
#[derive(Clone)]
pub struct AppServices {
    credentials: Arc<CredentialService>,
    progress: Arc<ProgressService>,
    content: Arc<ContentGenerator>,
    display_names: Arc<DisplayNames>,
    config_issues: Vec<ConfigIssue>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and seed the static users.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or seeding fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: &AppConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let backend: Arc<dyn GenerationBackend> =
            Arc::new(GeminiBackend::new(config.generation.clone()));
        Self::from_storage(storage, clock, config, backend).await
    }

    /// Build services over an existing `Storage` and generation backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Auth` if seeding the static users fails.
    pub async fn from_storage(
        storage: Storage,
        clock: Clock,
        config: &AppConfig,
        backend: Arc<dyn GenerationBackend>,
    ) -> Result<Self, AppServicesError> {
        let credentials = Arc::new(CredentialService::new(Arc::clone(&storage.users)));
        credentials.seed(&config.static_users).await?;

        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress)));
        let content = Arc::new(ContentGenerator::new(backend));

        let config_issues = config.issues();
        for issue in &config_issues {
            tracing::warn!(%issue, "configuration issue");
        }

        Ok(Self {
            credentials,
            progress,
            content,
            display_names: Arc::new(config.display_names.clone()),
            config_issues,
        })
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
}

//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use lernplan_core::model::CalendarError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the text-generation backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generation response had no text")]
    EmptyResponse,
    #[error("could not reach the generation service after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<GenerationError>,
    },
}

impl GenerationError {
    /// Whether another attempt could succeed.
    ///
    /// Transport errors (including timeouts) and non-success statuses are
    /// retried; a missing key or a response without text is not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::HttpStatus(_) => true,
            GenerationError::Http(err) => !err.is_decode(),
            GenerationError::MissingApiKey
            | GenerationError::EmptyResponse
            | GenerationError::Exhausted { .. } => false,
        }
    }
}

/// Errors emitted by `CredentialService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while loading the secrets file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid username {raw:?} in [{section}]")]
    InvalidUsername { section: &'static str, raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

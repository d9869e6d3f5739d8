#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod generation;
pub mod progress_service;

pub use lernplan_core::Clock;

pub use app_services::AppServices;
pub use auth_service::{AuthOutcome, CredentialService};
pub use config::{AppConfig, ConfigIssue, DisplayNames, GenerationConfig, StaticCredentials};
pub use error::{AppServicesError, AuthError, ConfigError, GenerationError, ProgressServiceError};
pub use generation::{ContentGenerator, GeneratedContent, RetryPolicy};
pub use progress_service::{MonthOverview, ProgressService};

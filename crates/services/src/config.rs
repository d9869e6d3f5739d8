use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lernplan_core::model::UserId;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_SECRETS_PATH: &str = "secrets.toml";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_GEMINI_API_KEY";
pub const API_KEY_ENV: &str = "LERNPLAN_GEMINI_API_KEY";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Shape of the secrets file on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SecretsFile {
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    gemini_endpoint: Option<String>,
    static_users: Option<BTreeMap<String, String>>,
    user_names: BTreeMap<String, String>,
}

/// Settings for the remote text-generation service.
#[derive(Clone)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    api_key: Option<String>,
    pub request_timeout: Duration,
}

impl GenerationConfig {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: normalize_api_key(api_key),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// The usable key, if any. Blank keys and the placeholder count as missing.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = normalize_api_key(api_key);
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn normalize_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
}

/// Username/password pairs that are seeded into the credential store.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    users: Vec<(UserId, String)>,
}

impl StaticCredentials {
    /// Build from raw pairs, normalizing every username.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUsername` for a blank username.
    pub fn from_pairs<I, U, P>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (U, P)>,
        U: AsRef<str>,
        P: Into<String>,
    {
        let users = pairs
            .into_iter()
            .map(|(name, password)| {
                let user = UserId::parse(name.as_ref()).map_err(|_| {
                    ConfigError::InvalidUsername {
                        section: "static_users",
                        raw: name.as_ref().to_string(),
                    }
                })?;
                Ok((user, password.into()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { users })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &str)> {
        self.users
            .iter()
            .map(|(user, password)| (user, password.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.users.iter().map(|(user, _)| user))
            .finish()
    }
}

/// Friendly names used in the greeting.
#[derive(Debug, Clone, Default)]
pub struct DisplayNames {
    names: HashMap<UserId, String>,
}

impl DisplayNames {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUsername` for a blank username.
    pub fn from_pairs<I, U, N>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (U, N)>,
        U: AsRef<str>,
        N: Into<String>,
    {
        let mut names = HashMap::new();
        for (raw, name) in pairs {
            let user =
                UserId::parse(raw.as_ref()).map_err(|_| ConfigError::InvalidUsername {
                    section: "user_names",
                    raw: raw.as_ref().to_string(),
                })?;
            names.insert(user, name.into());
        }
        Ok(Self { names })
    }

    /// Configured name for `user`, falling back to the id itself.
    #[must_use]
    pub fn display_name<'a>(&'a self, user: &'a UserId) -> &'a str {
        self.names.get(user).map_or(user.as_str(), String::as_str)
    }
}

/// Problems that keep the app running but block a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingApiKey,
    MissingStaticUsers,
}

impl ConfigIssue {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ConfigIssue::MissingApiKey => {
                "API Key not configured. Please set 'gemini_api_key' in your secrets.toml."
            }
            ConfigIssue::MissingStaticUsers => {
                "No users configured. Please add a [static_users] section to your secrets.toml."
            }
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything read from the secrets file.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub static_users: StaticCredentials,
    pub display_names: DisplayNames,
    static_users_declared: bool,
}

impl AppConfig {
    /// Read and parse the secrets file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    /// Parse secrets from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for invalid TOML and
    /// `ConfigError::InvalidUsername` for blank usernames.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, Path::new("<inline>"))
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: SecretsFile = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(path),
            source,
        })?;

        let mut generation = GenerationConfig::new(file.gemini_api_key);
        if let Some(model) = file.gemini_model.filter(|m| !m.trim().is_empty()) {
            generation.model = model;
        }
        if let Some(endpoint) = file.gemini_endpoint.filter(|e| !e.trim().is_empty()) {
            generation.endpoint = endpoint;
        }

        let static_users_declared = file.static_users.is_some();
        let static_users = StaticCredentials::from_pairs(file.static_users.unwrap_or_default())?;
        let display_names = DisplayNames::from_pairs(file.user_names)?;

        Ok(Self {
            generation,
            static_users,
            display_names,
            static_users_declared,
        })
    }

    /// Apply `LERNPLAN_GEMINI_API_KEY` when it is set and non-blank.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(env::var(API_KEY_ENV).ok())
    }

    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.generation = self.generation.with_api_key(Some(key));
        }
        self
    }

    #[must_use]
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !self.generation.has_api_key() {
            issues.push(ConfigIssue::MissingApiKey);
        }
        if !self.static_users_declared || self.static_users.is_empty() {
            issues.push(ConfigIssue::MissingStaticUsers);
        }
        issues
    }
}

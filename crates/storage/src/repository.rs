use async_trait::async_trait;
use chrono::NaiveDate;
use lernplan_core::model::{DayStatus, LessonPart, UserId};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted credential for one static user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user unless the username already exists.
    ///
    /// Returns `true` when a row was inserted. Existing rows are never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn insert_user_if_absent(&self, record: &UserRecord) -> Result<bool, StorageError>;

    /// Stored digest for `user`, or `None` when the user is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn password_hash(&self, user: &UserId) -> Result<Option<String>, StorageError>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Flags for `(user, date)`; unknown keys yield `DayStatus::default()`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_status(&self, user: &UserId, date: NaiveDate) -> Result<DayStatus, StorageError>;

    /// Overwrite one flag and upsert the row, atomically per key.
    ///
    /// Returns the status as stored after the write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn set_part(
        &self,
        user: &UserId,
        date: NaiveDate,
        part: LessonPart,
        value: bool,
    ) -> Result<DayStatus, StorageError>;

    /// Stored rows for `user` with `first <= date <= last`. Dates without a row
    /// are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn statuses_between(
        &self,
        user: &UserId,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, DayStatus>, StorageError>;
}

/// In-memory repository for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<Mutex<HashMap<UserId, String>>>,
    progress: Arc<Mutex<BTreeMap<(UserId, NaiveDate), DayStatus>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn insert_user_if_absent(&self, record: &UserRecord) -> Result<bool, StorageError> {
        let mut guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(&record.user_id) {
            return Ok(false);
        }
        guard.insert(record.user_id.clone(), record.password_hash.clone());
        Ok(true)
    }

    async fn password_hash(&self, user: &UserId) -> Result<Option<String>, StorageError> {
        let guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(user).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_status(&self, user: &UserId, date: NaiveDate) -> Result<DayStatus, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .get(&(user.clone(), date))
            .copied()
            .unwrap_or_default())
    }

    async fn set_part(
        &self,
        user: &UserId,
        date: NaiveDate,
        part: LessonPart,
        value: bool,
    ) -> Result<DayStatus, StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let entry = guard.entry((user.clone(), date)).or_default();
        *entry = entry.with_part(part, value);
        Ok(*entry)
    }

    async fn statuses_between(
        &self,
        user: &UserId,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, DayStatus>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .range((user.clone(), first)..=(user.clone(), last))
            .map(|((_, date), status)| (*date, *status))
            .collect())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { users, progress }
    }
}

use std::sync::Arc;

use lernplan_core::model::UserId;
use sha2::{Digest, Sha256};
use storage::repository::{UserRecord, UserRepository};
use subtle::ConstantTimeEq;

use crate::config::StaticCredentials;
use crate::error::AuthError;

/// Result of a login attempt.
///
/// Unknown users and wrong passwords are indistinguishable on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(UserId),
    InvalidCredentials,
}

impl AuthOutcome {
    #[must_use]
    pub fn user(&self) -> Option<&UserId> {
        match self {
            AuthOutcome::Authenticated(user) => Some(user),
            AuthOutcome::InvalidCredentials => None,
        }
    }
}

/// Seeds and checks the static credential list.
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
}

impl CredentialService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Lowercase hex SHA-256 of `password`.
    #[must_use]
    pub fn hash_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Insert every configured user that is not stored yet.
    ///
    /// Existing rows keep their digest even if the configured password changed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if a write fails.
    pub async fn seed(&self, credentials: &StaticCredentials) -> Result<usize, AuthError> {
        let mut inserted = 0;
        for (user, password) in credentials.iter() {
            let record = UserRecord {
                user_id: user.clone(),
                password_hash: Self::hash_password(password),
            };
            if self.users.insert_user_if_absent(&record).await? {
                inserted += 1;
            }
        }
        tracing::info!(
            configured = credentials.len(),
            inserted,
            "seeded static users"
        );
        Ok(inserted)
    }

    /// Check `password` against the stored digest for `username`.
    ///
    /// The username is trimmed and compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the lookup fails.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        let Ok(user) = UserId::parse(username) else {
            return Ok(AuthOutcome::InvalidCredentials);
        };

        let candidate = Self::hash_password(password);
        let Some(stored) = self.users.password_hash(&user).await? else {
            tracing::debug!(user = %user, "login for unknown user");
            return Ok(AuthOutcome::InvalidCredentials);
        };

        if bool::from(stored.as_bytes().ct_eq(candidate.as_bytes())) {
            Ok(AuthOutcome::Authenticated(user))
        } else {
            tracing::debug!(user = %user, "login with wrong password");
            Ok(AuthOutcome::InvalidCredentials)
        }
    }
}

use thiserror::Error;

use crate::model::ids::{StudyDay, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("already logged in as {0}")]
    AlreadyLoggedIn(UserId),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("no logout is awaiting confirmation")]
    NoLogoutPending,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    LoggedOut,
    LoggedIn(UserId),
    /// "Logout" was pressed and waits for confirm or cancel.
    ConfirmingLogout(UserId),
}

/// Per-window interaction state. Never persisted.
///
/// The study day survives logout, matching the behaviour of a single shared
/// browser tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    auth: AuthPhase,
    study_day: StudyDay,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn auth(&self) -> &AuthPhase {
        &self.auth
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !matches!(self.auth, AuthPhase::LoggedOut)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserId> {
        match &self.auth {
            AuthPhase::LoggedOut => None,
            AuthPhase::LoggedIn(user) | AuthPhase::ConfirmingLogout(user) => Some(user),
        }
    }

    #[must_use]
    pub fn logout_pending(&self) -> bool {
        matches!(self.auth, AuthPhase::ConfirmingLogout(_))
    }

    #[must_use]
    pub fn study_day(&self) -> StudyDay {
        self.study_day
    }

    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoggedIn` if a user is bound already.
    pub fn login(&mut self, user: UserId) -> Result<(), SessionError> {
        if let Some(current) = self.current_user() {
            return Err(SessionError::AlreadyLoggedIn(current.clone()));
        }
        self.auth = AuthPhase::LoggedIn(user);
        Ok(())
    }

    /// First step of logout.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` when logged out.
    pub fn request_logout(&mut self) -> Result<(), SessionError> {
        match &self.auth {
            AuthPhase::LoggedOut => Err(SessionError::NotLoggedIn),
            AuthPhase::ConfirmingLogout(_) => Ok(()),
            AuthPhase::LoggedIn(user) => {
                self.auth = AuthPhase::ConfirmingLogout(user.clone());
                Ok(())
            }
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoLogoutPending` unless a logout was requested.
    pub fn cancel_logout(&mut self) -> Result<(), SessionError> {
        match &self.auth {
            AuthPhase::ConfirmingLogout(user) => {
                self.auth = AuthPhase::LoggedIn(user.clone());
                Ok(())
            }
            _ => Err(SessionError::NoLogoutPending),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoLogoutPending` unless a logout was requested.
    pub fn confirm_logout(&mut self) -> Result<(), SessionError> {
        if !self.logout_pending() {
            return Err(SessionError::NoLogoutPending);
        }
        self.auth = AuthPhase::LoggedOut;
        Ok(())
    }

    pub fn set_study_day(&mut self, day: StudyDay) {
        self.study_day = day;
    }
}

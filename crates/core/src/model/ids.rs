use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserIdError {
    #[error("username cannot be empty")]
    Empty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudyDayError {
    #[error("study day must be between {min} and {max}, got {got}")]
    OutOfRange { got: i64, min: u16, max: u16 },
}

/// Case-normalized username.
///
/// Usernames are matched case-insensitively by storing them trimmed and
/// uppercased, so `"sma"` and `" SMA "` address the same account.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Normalize a raw username.
    ///
    /// # Errors
    ///
    /// Returns `UserIdError::Empty` if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, UserIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position in the 120-day plan. Independent of the calendar date.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudyDay(u16);

impl StudyDay {
    pub const FIRST: StudyDay = StudyDay(1);
    pub const LAST: StudyDay = StudyDay(120);

    /// # Errors
    ///
    /// Returns `StudyDayError::OutOfRange` outside `1..=120`.
    pub fn new(day: i64) -> Result<Self, StudyDayError> {
        u16::try_from(day)
            .ok()
            .filter(|d| (Self::FIRST.0..=Self::LAST.0).contains(d))
            .map(Self)
            .ok_or(StudyDayError::OutOfRange {
                got: day,
                min: Self::FIRST.0,
                max: Self::LAST.0,
            })
    }

    /// Clamp any integer into the valid range. Used for slider input.
    #[must_use]
    pub fn clamped(day: i64) -> Self {
        let clamped = day.clamp(i64::from(Self::FIRST.0), i64::from(Self::LAST.0));
        Self(u16::try_from(clamped).unwrap_or(Self::FIRST.0))
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Days left after this one.
    #[must_use]
    pub fn remaining(&self) -> u16 {
        Self::LAST.0 - self.0
    }
}

impl Default for StudyDay {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for StudyDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudyDay({})", self.0)
    }
}

impl fmt::Display for StudyDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

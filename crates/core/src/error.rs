use thiserror::Error;

use crate::model::{CalendarError, CurriculumError, SessionError, StudyDayError, UserIdError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
    #[error(transparent)]
    UserId(#[from] UserIdError),
    #[error(transparent)]
    StudyDay(#[from] StudyDayError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

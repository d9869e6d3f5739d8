pub mod calendar;
pub mod curriculum;
mod ids;
mod progress;
pub mod quiz;
mod session;

pub use calendar::{CalendarError, MonthGrid};
pub use curriculum::{CurriculumError, DayRange, LessonRecord, Phase, lesson_for_day, lessons};
pub use ids::{StudyDay, StudyDayError, UserId, UserIdError};
pub use progress::{Completion, DayStatus, LessonPart};
pub use quiz::{ANSWERS_SEPARATOR, ParsedQuiz};
pub use session::{AuthPhase, SessionError, SessionState};

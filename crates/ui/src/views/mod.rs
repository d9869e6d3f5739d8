mod banners;
mod calendar;
mod failure;
mod lesson;
mod login;
mod mark_complete;
mod plan;
mod quiz;
mod sidebar;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use banners::ConfigBanners;
pub use calendar::CalendarView;
pub use failure::GenerationFailure;
pub use lesson::LessonView;
pub use login::LoginView;
pub use mark_complete::MarkCompleteButton;
pub use plan::PlanView;
pub use quiz::QuizView;
pub use sidebar::Sidebar;
pub use state::{ViewError, ViewState, view_state_from_resource};

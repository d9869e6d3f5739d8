mod calendar_vm;
mod content_vm;
mod login_vm;
mod markdown_vm;
mod plan_vm;

pub use calendar_vm::{CalendarCellVm, CalendarVm, map_month_overview};
pub use content_vm::{
    GenerationFailureVm, LessonContentVm, QuizContentVm, map_lesson_content, map_quiz_content,
};
pub use login_vm::{INVALID_CREDENTIALS, LoginResult, submit_login};
pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use plan_vm::{PlanPhaseVm, PlanRowVm, plan_phases};

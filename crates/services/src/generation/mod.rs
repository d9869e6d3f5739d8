//! Lesson and quiz text from the remote language model.

mod backend;
mod content;
pub mod prompts;
mod retry;

pub use backend::{GeminiBackend, GenerationBackend, GenerationRequest};
pub use content::{ContentGenerator, ContentKey, GeneratedContent, LESSON_FAILED, QUIZ_FAILED};
pub use retry::RetryPolicy;

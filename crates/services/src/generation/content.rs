use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, warn};

use super::backend::{GenerationBackend, GenerationRequest};
use super::prompts;
use super::retry::RetryPolicy;
use crate::error::GenerationError;

pub const LESSON_FAILED: &str = "Lesson generation failed.";
pub const QUIZ_FAILED: &str = "Quiz generation failed.";

/// Memo key: the full set of inputs that went into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Lesson {
        topic: String,
        grammar: String,
        vocabulary: String,
    },
    Quiz {
        topic: String,
        grammar: String,
    },
}

/// Text to show for a lesson or quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    Ready(String),
    /// Generation failed; `sentinel` is shown in place of the content.
    Failed {
        sentinel: &'static str,
        reason: String,
    },
}

impl GeneratedContent {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            GeneratedContent::Ready(text) => text,
            GeneratedContent::Failed { sentinel, .. } => sentinel,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, GeneratedContent::Ready(_))
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            GeneratedContent::Ready(_) => None,
            GeneratedContent::Failed { reason, .. } => Some(reason),
        }
    }
}

/// Produces lesson and quiz text, memoizing successful results.
pub struct ContentGenerator {
    backend: Arc<dyn GenerationBackend>,
    retry: RetryPolicy,
    cache: Mutex<HashMap<ContentKey, String>>,
}

impl ContentGenerator {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.backend.is_configured()
    }

    pub async fn generate_lesson(
        &self,
        topic: &str,
        grammar: &str,
        vocabulary: &str,
    ) -> GeneratedContent {
        let key = ContentKey::Lesson {
            topic: topic.to_string(),
            grammar: grammar.to_string(),
            vocabulary: vocabulary.to_string(),
        };
        let request = prompts::lesson_request(topic, grammar, vocabulary);
        self.generate(key, &request, LESSON_FAILED).await
    }

    pub async fn generate_quiz(&self, topic: &str, grammar: &str) -> GeneratedContent {
        let key = ContentKey::Quiz {
            topic: topic.to_string(),
            grammar: grammar.to_string(),
        };
        let request = prompts::quiz_request(topic, grammar);
        self.generate(key, &request, QUIZ_FAILED).await
    }

    /// Forget every memoized result.
    pub fn clear_cache(&self) {
        let mut cache = self.cache();
        let dropped = cache.len();
        cache.clear();
        debug!(dropped, "generation cache cleared");
    }

    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<ContentKey, String>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn generate(
        &self,
        key: ContentKey,
        request: &GenerationRequest,
        sentinel: &'static str,
    ) -> GeneratedContent {
        let cached = self.cache().get(&key).cloned();
        if let Some(hit) = cached {
            debug!(?key, "generation cache hit");
            return GeneratedContent::Ready(hit);
        }

        if !self.backend.is_configured() {
            warn!("generation skipped: API key not configured");
            return GeneratedContent::Failed {
                sentinel,
                reason: GenerationError::MissingApiKey.to_string(),
            };
        }

        match self.retry.run(|_| self.backend.generate(request)).await {
            Ok(text) => {
                self.cache().insert(key, text.clone());
                GeneratedContent::Ready(text)
            }
            Err(err) => {
                error!(error = %err, ?key, "content generation failed");
                GeneratedContent::Failed {
                    sentinel,
                    reason: err.to_string(),
                }
            }
        }
    }
}

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use crate::error::GenerationError;

/// Exponential backoff for transient generation failures.
///
/// Attempt `n` (zero-based) that fails transiently is followed by a wait of
/// `base_delay * 2^n`. After the last attempt has failed and its wait has
/// elapsed the error is returned as `GenerationError::Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2_u32.saturating_pow(attempt))
    }

    /// Sum of all waits when every attempt fails transiently.
    #[must_use]
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_attempts.max(1))
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    /// Run `op` until it succeeds, fails permanently, or runs out of attempts.
    ///
    /// # Errors
    ///
    /// Returns the first non-transient error unchanged, or
    /// `GenerationError::Exhausted` wrapping the last transient one.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, GenerationError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, GenerationError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_transient() => return Err(err),
                Err(err) => {
                    let backoff = self.delay_for(attempt);
                    warn!(
                        attempt = attempt + 1,
                        attempts,
                        backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "generation request failed, backing off"
                    );
                    sleep(backoff).await;
                    attempt += 1;
                    if attempt >= attempts {
                        return Err(GenerationError::Exhausted {
                            attempts,
                            last: Box::new(err),
                        });
                    }
                }
            }
        }
    }
}

//! Capped exponential retry with random jitter around the single
//! external call.

use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::client::{CompletionBackend, CompletionRequest};
use crate::error::{Result, SummaryError};

/// Bounds of the retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Jittered delay before the next attempt: uniform over zero to the
    /// exponentially growing cap.
    fn delay_before(&self, next_attempt: u32) -> Duration {
        let exponent = next_attempt.saturating_sub(1).min(16);
        let cap = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(exponent))
            .min(self.max_delay);
        let cap_secs = cap.as_secs_f64();
        if cap_secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(rand::thread_rng().gen_range(0.0..cap_secs))
    }
}

/// Run one completion with bounded retries.
///
/// Non-retryable errors return immediately; retryable ones are retried
/// until the attempt cap, after which the last error surfaces as
/// [`SummaryError::Exhausted`]. No partial or cached result stands in.
pub fn complete_with_backoff(
    backend: &dyn CompletionBackend,
    request: &CompletionRequest,
    policy: &RetryPolicy,
) -> Result<String> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match backend.complete(request) {
            Ok(text) => return Ok(text),
            Err(error) if !error.is_retryable() => return Err(error),
            Err(error) if attempt >= max_attempts => {
                return Err(SummaryError::Exhausted {
                    attempts: attempt,
                    source: Box::new(error),
                });
            }
            Err(error) => {
                let delay = policy.delay_before(attempt + 1);
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    %error,
                    "completion attempt failed, backing off"
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}

//! Exponential backoff retry driver for SDK operations.
//!
//! Classifies failures through [`SDKError::is_retryable`] and manufactures
//! the [`RetryError`] values the rest of the platform keys off: stored
//! failures expose the full per-attempt error history, and consumers branch
//! on [`RetryReason`].

use std::future::Future;
use std::time::Duration;

use faultline_errors::{RetryError, RetryReason, SDKError};

#[derive(Clone, Debug, PartialEq)]
pub struct BackoffConfig {
    pub initial_delay_ms: u64,
    pub backoff_factor: f64,
    pub max_delay_ms: u64,
    pub jitter: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 200,
            backoff_factor: 2.0,
            max_delay_ms: 60_000,
            jitter: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: BackoffConfig,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: BackoffConfig::default(),
        }
    }
}

/// Delay before retry number `attempt` (1-based), capped and optionally
/// jittered into `[0.5, 1.5) × base`.
pub fn delay_for_attempt_ms(attempt: u32, config: &BackoffConfig, jitter_seed: u64) -> u64 {
    let exp = (attempt.saturating_sub(1)) as i32;
    let base = (config.initial_delay_ms as f64) * config.backoff_factor.powi(exp);
    let mut delay = base.min(config.max_delay_ms as f64);
    if config.jitter {
        delay *= jitter_factor(attempt, jitter_seed);
    }
    delay.round().max(0.0) as u64
}

fn jitter_factor(attempt: u32, jitter_seed: u64) -> f64 {
    let mut x = jitter_seed ^ ((attempt as u64) << 32) ^ 0x9E3779B97F4A7C15;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    let r = x.wrapping_mul(0x2545F4914F6CDD1D);
    let unit = (r as f64) / (u64::MAX as f64);
    0.5 + unit
}

/// Runs `op` until it succeeds, its error is not worth retrying, or the
/// policy's attempts are exhausted.
///
/// `op` receives the 1-based attempt number. A non-retryable failure on the
/// first attempt comes back unwrapped; every other terminal outcome is a
/// [`RetryError`] accumulating the per-attempt errors in order. The
/// `jitter_seed` spreads concurrent callers apart; pass a stable per-subject
/// value to keep delays reproducible.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    jitter_seed: u64,
    mut op: F,
) -> Result<T, SDKError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, SDKError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut errors: Vec<SDKError> = Vec::new();

    for attempt in 1..=max_attempts {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                let last_message = error.message().to_string();
                let retryable = error.is_retryable();
                errors.push(error);

                if !retryable {
                    if attempt == 1 {
                        return Err(errors.remove(0));
                    }
                    return Err(RetryError::new(
                        format!(
                            "failed after {attempt} attempts with non-retryable error: '{last_message}'"
                        ),
                        RetryReason::ErrorNotRetryable,
                        errors,
                    )
                    .into());
                }

                if attempt < max_attempts {
                    let delay = delay_for_attempt_ms(attempt, &policy.backoff, jitter_seed);
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
            }
        }
    }

    let attempts = errors.len();
    let last_message = errors
        .last()
        .map(|error| error.message().to_string())
        .unwrap_or_default();
    Err(RetryError::new(
        format!("failed after {attempts} attempts, last error: '{last_message}'"),
        RetryReason::MaxRetriesExceeded,
        errors,
    )
    .into())
}

use crate::GeminiError;

use std::time::Duration;

use tokio::time::sleep;

/// Runtime retry settings, built from `ca_config::RetryConfig`
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay, hinted or computed
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Scale computed delays by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&ca_config::RetryConfig::default())
    }
}

impl From<&ca_config::RetryConfig> for RetryPolicy {
    fn from(config: &ca_config::RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_delay: config.initial_delay(),
            max_delay: config.max_delay(),
            backoff_multiplier: config.backoff_multiplier,
            jitter: config.jitter,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait before the next attempt.
    ///
    /// A server hint wins over the computed backoff. Both are capped at `max_delay`.
    fn next_delay(&self, computed: Duration, hint: Option<Duration>) -> Duration {
        let delay = match hint {
            Some(hint) => hint,
            None if self.jitter => {
                let jitter_factor = 0.5 + rand::random::<f64>();
                Duration::from_secs_f64(computed.as_secs_f64() * jitter_factor)
            }
            None => computed,
        };
        delay.min(self.max_delay)
    }
}

/// Execute an async operation with retry logic
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempts = 0;
    let mut delay = policy.initial_delay;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempts);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() || attempts >= policy.max_attempts {
                    log::warn!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        attempts,
                        e
                    );
                    return Err(e);
                }

                let actual_delay = policy.next_delay(delay, e.retry_after());

                log::warn!(
                    "{} rate limited (attempt {}/{}). Retrying in {:.1}s",
                    operation_name,
                    attempts,
                    policy.max_attempts,
                    actual_delay.as_secs_f64()
                );

                sleep(actual_delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * policy.backoff_multiplier)
                        .min(policy.max_delay.as_secs_f64()),
                );
            }
        }
    }
}

/// Trait for errors that can indicate retryability
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;

    /// Delay requested by the remote side, if it sent one
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl IsRetryable for GeminiError {
    fn is_retryable(&self) -> bool {
        self.is_rate_limited()
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            GeminiError::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

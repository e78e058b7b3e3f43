use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::time::Duration;

use serde::Deserialize;

// Bounds for retrying Gemini 429 responses
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

pub const MIN_INITIAL_DELAY_MS: u64 = 10;
pub const MAX_INITIAL_DELAY_MS: u64 = 10_000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1_000;

/// Gemini "retry in Ns" hints are clamped to this ceiling as well
pub const MIN_MAX_DELAY_SECS: u64 = 1;
pub const MAX_MAX_DELAY_SECS: u64 = 120;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 60;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

pub const DEFAULT_JITTER: bool = false;

/// How a request waits out Gemini rate limiting (`[retry]`).
///
/// Only 429 responses are retried. Delays grow by `backoff_multiplier` from
/// `initial_delay_ms`. A delay hinted by Gemini replaces the computed one
/// for that attempt. Every delay is capped at `max_delay_secs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Attempts per request, the first call included
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_secs: u64,
    pub backoff_multiplier: f64,
    /// Scale computed delays by a random factor
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl RetryConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    /// Longest a single request can sleep before giving up on a rate limit
    pub fn worst_case_wait(&self) -> Duration {
        self.max_delay() * self.max_attempts.saturating_sub(1)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "retry.max_attempts",
            self.max_attempts,
            MIN_MAX_ATTEMPTS,
            MAX_MAX_ATTEMPTS,
        )?;
        check_range(
            "retry.initial_delay_ms",
            self.initial_delay_ms,
            MIN_INITIAL_DELAY_MS,
            MAX_INITIAL_DELAY_MS,
        )?;
        check_range(
            "retry.max_delay_secs",
            self.max_delay_secs,
            MIN_MAX_DELAY_SECS,
            MAX_MAX_DELAY_SECS,
        )?;
        check_range(
            "retry.backoff_multiplier",
            self.backoff_multiplier,
            MIN_BACKOFF_MULTIPLIER,
            MAX_BACKOFF_MULTIPLIER,
        )?;

        if self.initial_delay() > self.max_delay() {
            return Err(ConfigError::config(format!(
                "retry.initial_delay_ms ({}) exceeds retry.max_delay_secs ({}s)",
                self.initial_delay_ms, self.max_delay_secs
            )));
        }

        Ok(())
    }
}

fn check_range<T: PartialOrd + Display>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::config(format!(
            "{field} must be {min}-{max}, got {value}"
        )));
    }
    Ok(())
}

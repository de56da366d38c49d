//! Retry policy shared by the webhook clients.

use std::time::Duration;

/// How a client paces repeated attempts against a flaky upstream.
///
/// Backoff is linear: the wait after attempt `n` (zero-based) is
/// `base_delay * (n + 1)`. Every attempt is also bounded by `timeout`,
/// measured per attempt rather than across the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Zero means a single attempt.
    pub max_retries: u32,
    /// Base unit of the linear backoff.
    pub base_delay: Duration,
    /// Per-attempt deadline covering the request and body read.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
            timeout: Duration::from_secs(20),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries, with the given per-attempt deadline.
    pub fn single_attempt(timeout: Duration) -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            timeout,
        }
    }

    /// Set the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base unit of the linear backoff.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Set the per-attempt deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attempts this policy allows in total, first try included.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// The wait before retrying after the given zero-based attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * (attempt + 1)
    }
}

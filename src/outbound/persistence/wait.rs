//! Bounded startup wait for the record store.
//!
//! The service starts in a connecting state and polls the pool until a
//! connection checks out. The wait is bounded with exponential backoff so a
//! permanently misconfigured database surfaces as a fatal startup error
//! instead of an endless poll loop; the bound is sized for co-located
//! startup ordering, not for riding out network partitions.

use std::time::Duration;

use tracing::{info, warn};

use super::pool::DbPool;

/// Backoff policy for the startup connection wait.
///
/// Defaults: first retry after 2 seconds, doubling per attempt, capped at
/// 30 seconds, at most 10 attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    initial_delay: Duration,
    max_delay: Duration,
    max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
            max_attempts: 10,
        }
    }
}

impl RetryPolicy {
    /// Construct a policy from its raw knobs.
    pub fn new(initial_delay: Duration, max_delay: Duration, max_attempts: u32) -> Self {
        Self {
            initial_delay,
            max_delay,
            max_attempts,
        }
    }

    /// Maximum number of connection attempts before giving up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Next delay after the given one: doubled, capped at the maximum.
    pub fn next_delay(&self, current: Duration) -> Duration {
        (current * 2).min(self.max_delay)
    }
}

/// Raised when the record store never became reachable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("database not reachable after {attempts} attempts: {message}")]
pub struct StartupWaitError {
    pub attempts: u32,
    pub message: String,
}

/// Poll the pool until a connection checks out or the policy is exhausted.
pub async fn wait_for_database(pool: &DbPool, policy: &RetryPolicy) -> Result<(), StartupWaitError> {
    let mut delay = policy.initial_delay();
    let mut attempt = 1u32;

    loop {
        match pool.get().await {
            Ok(_) => {
                info!(attempt, "database connection established");
                return Ok(());
            }
            Err(err) if attempt >= policy.max_attempts() => {
                return Err(StartupWaitError {
                    attempts: attempt,
                    message: err.to_string(),
                });
            }
            Err(err) => {
                warn!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "waiting for database"
                );
                tokio::time::sleep(delay).await;
                delay = policy.next_delay(delay);
                attempt += 1;
            }
        }
    }
}

//! Bounded fixed-delay retry for poll requests.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

/// Retry budget for a poll request.
///
/// The protocol has no per-request timeout; the attempt budget is what
/// bounds a failing poll.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, the initial request included.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub wait: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            wait: Duration::from_secs(1),
        }
    }
}

/// Run `op` up to `config.max_attempts` times, sleeping `config.wait`
/// between attempts. Intermediate failures are discarded; the final
/// attempt's error propagates unchanged.
pub(crate) async fn with_retry<T, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < config.max_attempts => {
                tracing::debug!(
                    attempt,
                    max = config.max_attempts,
                    delay_ms = config.wait.as_millis() as u64,
                    "retrying after error: {e}"
                );
                tokio::time::sleep(config.wait).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

//! Resource waiting with exponential backoff.
//!
//! Provides a generic abstraction for waiting on AWS resources (or any async
//! condition) to become ready, with configurable exponential backoff and jitter.

use anyhow::Result;
use backon::{BackoffBuilder, ExponentialBuilder};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for resource waiting with exponential backoff.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Initial delay between checks
    pub initial_delay: Duration,
    /// Maximum delay between checks (cap for exponential growth)
    pub max_delay: Duration,
    /// Maximum total time to wait before timeout
    pub timeout: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Wait for a resource to become ready with exponential backoff.
///
/// # Arguments
/// * `config` - Wait configuration
/// * `check` - Async function that returns `Ok(true)` when ready, `Ok(false)` to retry
/// * `resource_name` - Name for logging
///
/// # Returns
/// * `Ok(())` - Resource is ready
/// * `Err` - Timeout, or check returned an error
///
/// # Example
/// ```ignore
/// wait_for_resource(
///     WaitConfig::default(),
///     || async {
///         let ready = check_if_resource_exists().await;
///         Ok(ready)
///     },
///     "my-resource",
/// ).await?;
/// ```
pub async fn wait_for_resource<F, Fut>(
    config: WaitConfig,
    check: F,
    resource_name: &str,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = tokio::time::Instant::now();
    let mut attempts = 0u32;

    let backoff = ExponentialBuilder::default()
        .with_min_delay(config.initial_delay)
        .with_max_delay(config.max_delay)
        .with_factor(2.0)
        .with_jitter()
        .build();

    let mut delays = backoff.into_iter();

    loop {
        attempts += 1;

        if start.elapsed() >= config.timeout {
            anyhow::bail!(
                "Timeout waiting for {} after {:?} ({} attempts)",
                resource_name,
                config.timeout,
                attempts
            );
        }

        match check().await {
            Ok(true) => {
                debug!(resource = %resource_name, attempts, "Resource ready");
                return Ok(());
            }
            Ok(false) => {
                let delay = delays.next().unwrap_or(config.max_delay);
                debug!(
                    resource = %resource_name,
                    attempt = attempts,
                    delay_ms = delay.as_millis(),
                    "Resource not ready, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                warn!(resource = %resource_name, error = ?e, "Resource check failed");
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fast() -> WaitConfig {
        WaitConfig {
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            timeout: Duration::from_secs(30),
        }
    }

    #[tokio::test]
    async fn returns_once_check_passes() {
        let calls = Cell::new(0u32);
        wait_for_resource(
            fast(),
            || {
                calls.set(calls.get() + 1);
                let ready = calls.get() >= 3;
                async move { Ok(ready) }
            },
            "test resource",
        )
        .await
        .unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn check_error_stops_waiting() {
        let calls = Cell::new(0u32);
        let result = wait_for_resource(
            fast(),
            || {
                calls.set(calls.get() + 1);
                async { Err(anyhow::anyhow!("describe failed")) }
            },
            "test resource",
        )
        .await;
        assert!(result.unwrap_err().to_string().contains("describe failed"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_never_ready() {
        let config = WaitConfig {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
        };
        let result = wait_for_resource(config, || async { Ok(false) }, "stuck resource").await;
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Timeout waiting for stuck resource"), "{msg}");
    }
}

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff schedule for operations that may fail transiently, such as the
/// first connection to a deployment that is still starting.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Upper bound for any single delay
    pub max_delay: Duration,

    /// Factor applied to the delay after each failure
    pub backoff_multiplier: u32,

    /// Randomise each delay to between 50% and 100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 3 retries, 100ms initial delay, 5s cap, x2 backoff, jitter on
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal delay before each retry, in order.
    fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        std::iter::successors(Some(self.initial_delay), |delay| {
            Some(delay.saturating_mul(self.backoff_multiplier))
        })
        .map(|delay| delay.min(self.max_delay))
        .take(self.max_retries as usize)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds, fails permanently, or the retries in
/// `config` run out.
///
/// Errors for which `is_transient` returns `false` are returned immediately;
/// otherwise the last error is returned once every retry has failed.
///
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let client = retry_with_backoff(
///     || connect_from_config(&config),
///     RetryConfig::new().with_max_retries(5),
///     MongoError::is_transient,
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E, P>(
    mut operation: F,
    config: RetryConfig,
    is_transient: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let mut delays = config.delays();
    let mut attempt: u32 = 1;

    loop {
        let error = match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(error) => error,
        };

        if !is_transient(&error) {
            warn!(attempt, error = %error, "Operation failed permanently, not retrying");
            return Err(error);
        }

        let Some(delay) = delays.next() else {
            warn!(attempts = attempt, error = %error, "Operation failed, retries exhausted");
            return Err(error);
        };
        let delay = if config.use_jitter { jitter(delay) } else { delay };

        warn!(
            attempt,
            max_retries = config.max_retries,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "Operation failed, retrying"
        );

        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

fn jitter(delay: Duration) -> Duration {
    delay.mul_f64(0.5 + rand::random::<f64>() * 0.5)
}

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// The only status the executor treats as transient.
pub const RATE_LIMITED_STATUS: u16 = 429;

/// Specifies the backoff strategy for retrying rate-limited requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Grows the delay by a constant step: retry `k` waits `base + step * (k - 1)`.
    Linear {
        /// Delay before the first retry.
        base: Duration,
        /// Added for each subsequent retry.
        step: Duration,
    },
}

impl Backoff {
    /// Delay before the given retry, counting retries from 1.
    pub fn delay_for(&self, retry: u32) -> Duration {
        match self {
            Backoff::Fixed(d) => *d,
            Backoff::Linear { base, step } => {
                base.saturating_add(step.saturating_mul(retry.saturating_sub(1)))
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Linear {
            base: Duration::from_secs(60),
            step: Duration::from_secs(30),
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::default(),
        }
    }
}

impl RetryConfig {
    /// Default policy with a different retry bound.
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Upper bound on requests sent for one logical call, the first attempt included.
    pub fn max_attempts(&self) -> u32 {
        if self.enabled {
            self.max_retries.saturating_add(1)
        } else {
            1
        }
    }
}

/// The capability used to wait between retries.
///
/// Injected into the client so callers can swap real waiting for something else
/// (a test double recording the requested durations, a scaled clock, ...).
pub trait Sleeper: Send + Sync {
    fn sleep(&self, dur: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Waits on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, dur: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(dur))
    }
}

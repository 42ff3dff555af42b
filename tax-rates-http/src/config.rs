use std::time::Duration;

/// Connection and retry settings for [`crate::HttpTaxClient`].
///
/// Supplied by the host process; nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateClientConfig {
    /// Base URL of the rate source, e.g. `http://localhost:5001`.
    pub base_url: String,

    /// Total number of attempts per uncached lookup (minimum 1).
    pub max_retries: u32,

    /// Step of the linear backoff between attempts.
    pub backoff_base: Duration,

    /// Overall per-request timeout, independent of backoff delays.
    pub timeout: Duration,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_BACKOFF_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(DEFAULT_BACKOFF_MS);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

impl Default for RateClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RateClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attempts actually made; a zero budget still makes one request.
    pub(crate) fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Delay after a retryable failure on `attempt` (0-based).
    pub(crate) fn backoff_after(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(attempt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = RateClientConfig::default();

        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.backoff_base, Duration::from_millis(200));
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn backoff_is_linear_from_zero() {
        let config = RateClientConfig::default();

        assert_eq!(config.backoff_after(0), Duration::ZERO);
        assert_eq!(config.backoff_after(1), Duration::from_millis(200));
        assert_eq!(config.backoff_after(2), Duration::from_millis(400));
    }

    #[test]
    fn zero_retries_still_attempts_once() {
        let config = RateClientConfig::default().with_max_retries(0);

        assert_eq!(config.attempts(), 1);
    }

    #[test]
    fn builders_override_fields() {
        let config = RateClientConfig::default()
            .with_base_url("http://rates.internal")
            .with_max_retries(5)
            .with_backoff_base(Duration::from_millis(10))
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://rates.internal");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.backoff_base, Duration::from_millis(10));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

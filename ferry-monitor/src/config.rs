//! Monitor configuration
//!
//! Delays and retry policy of the status and log loops.

use std::time::Duration;

/// Upper bound of the transport retry backoff
pub const MAX_RETRY_BACKOFF: Duration = Duration::from_secs(30);

/// Monitor configuration
///
/// The defaults reproduce the reference dashboard behavior: 500 ms between
/// polls and no retries, so the first failed fetch ends a loop.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Delay between state polls while the transfer is not terminal
    pub status_interval: Duration,

    /// Delay before re-fetching the log after an empty window
    pub log_interval: Duration,

    /// How many times a fetch that never reached the runner is retried
    pub max_transport_retries: u32,

    /// First retry delay; doubles on every attempt up to [`MAX_RETRY_BACKOFF`]
    pub retry_backoff: Duration,
}

impl MonitorConfig {
    /// Creates a configuration with the same delay for both loops
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            status_interval: poll_interval,
            log_interval: poll_interval,
            ..Self::default()
        }
    }

    /// Enables bounded retries of transport failures
    pub fn with_transport_retries(mut self, retries: u32) -> Self {
        self.max_transport_retries = retries;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.status_interval.is_zero() {
            anyhow::bail!("status_interval must be greater than 0");
        }

        if self.log_interval.is_zero() {
            anyhow::bail!("log_interval must be greater than 0");
        }

        if self.max_transport_retries > 0 && self.retry_backoff.is_zero() {
            anyhow::bail!("retry_backoff must be greater than 0 when retries are enabled");
        }

        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            status_interval: Duration::from_millis(500),
            log_interval: Duration::from_millis(500),
            max_transport_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.status_interval, Duration::from_millis(500));
        assert_eq!(config.log_interval, Duration::from_millis(500));
        assert_eq!(config.max_transport_retries, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = MonitorConfig::new(Duration::from_secs(1));
        assert!(config.validate().is_ok());

        config.log_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.log_interval = Duration::from_secs(1);
        config.retry_backoff = Duration::ZERO;
        assert!(config.validate().is_ok());

        config = config.with_transport_retries(3);
        assert!(config.validate().is_err());
    }
}

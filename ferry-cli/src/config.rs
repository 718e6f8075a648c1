//! Configuration module
//!
//! Handles CLI configuration: where the runner is and how to poll it.

use anyhow::Result;
use ferry_client::FerryClient;
use ferry_monitor::MonitorConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the transfer runner
    pub runner_url: String,

    /// Poll delays and retry policy of `transfer watch`
    pub monitor: MonitorConfig,
}

impl Config {
    pub fn new(runner_url: String) -> Result<Self> {
        if !runner_url.starts_with("http://") && !runner_url.starts_with("https://") {
            anyhow::bail!("runner URL must start with http:// or https://");
        }

        Ok(Self {
            runner_url,
            monitor: MonitorConfig::default(),
        })
    }

    pub fn client(&self) -> FerryClient {
        FerryClient::new(&self.runner_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_url() {
        assert!(Config::new("localhost:8080".to_string()).is_err());
        let config = Config::new("http://localhost:8080/".to_string()).unwrap();
        assert_eq!(config.client().base_url(), "http://localhost:8080");
    }
}

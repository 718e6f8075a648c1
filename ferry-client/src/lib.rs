//! Ferry HTTP Client
//!
//! A small, type-safe HTTP client for the REST API of a Ferry transfer runner.
//!
//! The runner executes file transfers; this client only observes them (state,
//! log pages) and asks it for directory listings ahead of a transfer.
//!
//! # Example
//!
//! ```no_run
//! use ferry_client::FerryClient;
//! use ferry_core::domain::job::JobId;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FerryClient::new("http://localhost:8080");
//!
//!     let snapshot = client.get_transfer(&JobId::from("3f2a")).await?;
//!     println!("Transfer is {}", snapshot.state);
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod listings;
mod transfers;

// Re-export commonly used types
pub use api::TransferApi;
pub use error::{ClientError, Result, TRANSPORT_FAILURE_MESSAGE};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the transfer runner API
///
/// Endpoints are grouped into:
/// - Transfer observation (state, log pages, listing, abort)
/// - Directory checks (local and remote listings)
#[derive(Debug, Clone)]
pub struct FerryClient {
    /// Base URL of the runner (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl FerryClient {
    /// Create a new runner client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the runner API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use ferry_client::FerryClient;
    ///
    /// let client = FerryClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new runner client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use ferry_client::FerryClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .connect_timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = FerryClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the runner
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL under the base URL
    ///
    /// Each segment is percent-encoded on its own, so an opaque id containing
    /// `/`, `?` or `#` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::Transport(format!("Invalid runner URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Transport(format!("Runner URL {} cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::Server`] with the message
    /// extracted from the body. A success whose body does not decode is also a
    /// server error: a response did arrive.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::from_response_body(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::server(
                status.as_u16(),
                format!("Failed to parse JSON response: {}", e),
            )
        })
    }

    /// Handle an API response that returns no content
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::from_response_body(status.as_u16(), &body));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FerryClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = FerryClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = FerryClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let client = FerryClient::new("http://localhost:8080/");
        let url = client
            .endpoint(&["api", "transfers", "a/b?c#d", "log"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/transfers/a%2Fb%3Fc%23d/log"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = FerryClient::new("http://localhost:8080/runner");
        let url = client.endpoint(&["api", "transfers"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/runner/api/transfers");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let client = FerryClient::new("not a url");
        assert!(client.endpoint(&["api"]).unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_runner_is_transport_error() {
        // port 9 (discard) on loopback refuses connections on any sane test host
        let client = FerryClient::new("http://127.0.0.1:9");
        let err = client
            .get_transfer(&"missing".into())
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.user_message(), TRANSPORT_FAILURE_MESSAGE);
    }
}

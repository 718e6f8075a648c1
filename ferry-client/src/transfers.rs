//! Transfer-related API endpoints

use ferry_core::domain::job::{JobId, JobSnapshot};
use ferry_core::domain::log::LogWindow;
use ferry_core::dto::log::LogEventsPage;
use tracing::debug;

use crate::FerryClient;
use crate::error::{ClientError, Result};

impl FerryClient {
    // =============================================================================
    // Transfer State
    // =============================================================================

    /// Get the current state of a transfer
    ///
    /// # Arguments
    /// * `job_id` - The transfer id
    pub async fn get_transfer(&self, job_id: &JobId) -> Result<JobSnapshot> {
        let url = self.endpoint(&["api", "transfers", job_id.as_str()])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// List all transfers known to the runner
    pub async fn list_transfers(&self) -> Result<Vec<JobSnapshot>> {
        let url = self.endpoint(&["api", "transfers"])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Ask the runner to abort a transfer
    ///
    /// The transfer moves to `ABORTED` asynchronously; poll its state to observe it.
    pub async fn abort_transfer(&self, job_id: &JobId) -> Result<()> {
        let url = self.endpoint(&["api", "transfers", job_id.as_str(), "abort"])?;
        let response = self.client.get(url).send().await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // Transfer Log
    // =============================================================================

    /// Get the log entries of a transfer starting at `from`
    ///
    /// The runner caps the page size, so the returned window may end before the
    /// log does. An empty window means nothing past `from` exists yet.
    ///
    /// # Arguments
    /// * `job_id` - The transfer id
    /// * `from` - Index of the first entry wanted
    pub async fn get_transfer_log(&self, job_id: &JobId, from: u64) -> Result<LogWindow> {
        let url = self.endpoint(&["api", "transfers", job_id.as_str(), "log"])?;
        let response = self
            .client
            .get(url)
            .query(&[("from", from)])
            .send()
            .await?;

        let page: LogEventsPage = self.handle_response(response).await?;
        debug!(
            "Log page for transfer {}: [{}, {})",
            job_id, page.from_index, page.to_index
        );

        page.into_window()
            .map_err(|e| ClientError::server(200, format!("Malformed log page: {}", e)))
    }
}

//! Transfer observation seam
//!
//! The monitor loops depend on this trait rather than on [`FerryClient`]
//! directly, so they can run against a scripted runner in tests.

use async_trait::async_trait;
use ferry_core::domain::job::{JobId, JobSnapshot};
use ferry_core::domain::log::LogWindow;

use crate::FerryClient;
use crate::error::Result;

/// Read-only access to a transfer's state and log
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// Fetch the current state snapshot
    async fn get_transfer(&self, job_id: &JobId) -> Result<JobSnapshot>;

    /// Fetch the log window starting at `from`
    async fn get_transfer_log(&self, job_id: &JobId, from: u64) -> Result<LogWindow>;
}

#[async_trait]
impl TransferApi for FerryClient {
    async fn get_transfer(&self, job_id: &JobId) -> Result<JobSnapshot> {
        FerryClient::get_transfer(self, job_id).await
    }

    async fn get_transfer_log(&self, job_id: &JobId, from: u64) -> Result<LogWindow> {
        FerryClient::get_transfer_log(self, job_id, from).await
    }
}

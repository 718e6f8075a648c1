//! Status poller
//!
//! Polls a transfer's state until it is terminal, surfacing every change and
//! publishing each snapshot into the session's state cell.

use ferry_client::TransferApi;
use ferry_core::domain::job::{JobId, JobSnapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{fetch_with_retry, sleep_or_cancel};
use crate::config::MonitorConfig;
use crate::event::{Component, MonitorEvent};

/// Polls the state of one transfer
pub struct StatusPoller {
    api: Arc<dyn TransferApi>,
    job_id: JobId,
    config: MonitorConfig,
    events: mpsc::UnboundedSender<MonitorEvent>,
    state: watch::Sender<JobSnapshot>,
}

impl StatusPoller {
    /// Creates a poller
    ///
    /// The state cell must already hold the initial known state of the job;
    /// only snapshots that differ from it are surfaced as changes.
    pub fn new(
        api: Arc<dyn TransferApi>,
        job_id: JobId,
        config: MonitorConfig,
        events: mpsc::UnboundedSender<MonitorEvent>,
        state: watch::Sender<JobSnapshot>,
    ) -> Self {
        Self {
            api,
            job_id,
            config,
            events,
            state,
        }
    }

    /// Runs the polling loop until the job is terminal, a fetch fails, or the
    /// session is cancelled
    pub async fn run(self, cancel: CancellationToken) {
        info!("Polling state of transfer {}", self.job_id);

        let mut last = self.state.borrow().clone();

        loop {
            let api = &self.api;
            let job_id = &self.job_id;
            let fetched =
                fetch_with_retry(&self.config, &cancel, "transfer state", || {
                    api.get_transfer(job_id)
                })
                .await;

            let snapshot = match fetched {
                Some(Ok(snapshot)) => snapshot,
                Some(Err(e)) => {
                    warn!("Stopped polling transfer {}: {}", self.job_id, e);
                    self.emit(MonitorEvent::StatusFailed(e));
                    break;
                }
                None => {
                    debug!("Status polling of transfer {} cancelled", self.job_id);
                    return;
                }
            };

            self.state.send_replace(snapshot.clone());

            if !same_view(&last, &snapshot) {
                debug!("Transfer {} is now {}", self.job_id, snapshot.state);
                last = snapshot.clone();
                if !self.emit(MonitorEvent::StateChanged(snapshot.clone())) {
                    return;
                }
            }

            if snapshot.is_terminal() {
                info!(
                    "Transfer {} reached terminal state {}",
                    self.job_id, snapshot.state
                );
                break;
            }

            if !sleep_or_cancel(self.config.status_interval, &cancel).await {
                return;
            }
        }

        self.emit(MonitorEvent::Finished(Component::StatusPoller));
    }

    /// Sends an event, returning `false` once nobody is listening anymore
    fn emit(&self, event: MonitorEvent) -> bool {
        self.events.send(event).is_ok()
    }
}

/// Whether two snapshots would be displayed identically
fn same_view(a: &JobSnapshot, b: &JobSnapshot) -> bool {
    a.state == b.state && a.fail_cause == b.fail_cause
}

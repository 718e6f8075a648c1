//! Monitoring session
//!
//! One session observes one transfer: it owns the state cell shared by the
//! two loops and the token that tears them down when the session is dropped.

use ferry_client::TransferApi;
use ferry_core::domain::job::{JobId, JobSnapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::MonitorConfig;
use crate::event::MonitorEvent;
use crate::scheduler::{LogTailer, StatusPoller};

/// A running observation of one transfer
///
/// Both loops stop on their own once the job is terminal and its log is
/// exhausted. Dropping the session before that stops them early.
pub struct Session {
    job_id: JobId,
    state: watch::Receiver<JobSnapshot>,
    cancel: CancellationToken,
    poller: Option<JoinHandle<()>>,
    tailer: Option<JoinHandle<()>>,
}

impl Session {
    /// Starts the status poller and log tailer for `job_id`
    ///
    /// `initial` is the state known to whoever created the job. Events of both
    /// loops arrive on the returned channel, which closes once both have ended.
    pub fn start(
        api: Arc<dyn TransferApi>,
        job_id: JobId,
        initial: JobSnapshot,
        config: MonitorConfig,
    ) -> (Self, mpsc::UnboundedReceiver<MonitorEvent>) {
        info!(
            "Starting session for transfer {} (initial state {})",
            job_id, initial.state
        );

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(initial);
        let cancel = CancellationToken::new();

        let poller = StatusPoller::new(
            Arc::clone(&api),
            job_id.clone(),
            config.clone(),
            events_tx.clone(),
            state_tx,
        );
        let tailer = LogTailer::new(api, job_id.clone(), config, events_tx, state_rx.clone());

        let session = Self {
            job_id,
            state: state_rx,
            poller: Some(tokio::spawn(poller.run(cancel.clone()))),
            tailer: Some(tokio::spawn(tailer.run(cancel.clone()))),
            cancel,
        };

        (session, events_rx)
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Latest snapshot published by the status poller
    pub fn state(&self) -> JobSnapshot {
        self.state.borrow().clone()
    }

    /// Waits until both loops have ended
    pub async fn wait(mut self) {
        for handle in [self.poller.take(), self.tailer.take()].into_iter().flatten() {
            if let Err(e) = handle.await {
                warn!("Monitor task of transfer {} panicked: {}", self.job_id, e);
            }
        }
        info!("Session for transfer {} ended", self.job_id);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

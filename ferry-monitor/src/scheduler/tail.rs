//! Log tailer
//!
//! Reads a transfer's log incrementally. Entries are fetched strictly after the
//! last index seen, surfaced in order exactly once, and the loop stops only
//! when the job is terminal *and* the runner has nothing more to return.

use ferry_client::{ClientError, TransferApi};
use ferry_core::domain::job::{JobId, JobSnapshot};
use ferry_core::domain::log::LogWindow;
use ferry_core::dto::log::WindowError;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{fetch_with_retry, sleep_or_cancel};
use crate::config::MonitorConfig;
use crate::event::{Component, MonitorEvent};

/// Next unread log index
///
/// Only moves forward, and only by exactly the size of a window that starts
/// where the previous one ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogCursor {
    next: u64,
}

impl LogCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next fetch should start from
    pub fn next(&self) -> u64 {
        self.next
    }

    /// Consumes a window, returning how many new entries it carried
    ///
    /// Empty windows are accepted wherever they claim to be and never move the
    /// cursor. A non-empty window must start exactly at the cursor.
    pub fn accept(&mut self, window: &LogWindow) -> Result<usize, WindowError> {
        if window.is_empty() {
            return Ok(0);
        }

        if window.from_index != self.next {
            return Err(WindowError::NotContiguous {
                expected: self.next,
                from_index: window.from_index,
            });
        }

        self.next = window.to_index;
        Ok(window.len())
    }
}

/// Tails the log of one transfer
pub struct LogTailer {
    api: Arc<dyn TransferApi>,
    job_id: JobId,
    config: MonitorConfig,
    events: mpsc::UnboundedSender<MonitorEvent>,
    state: watch::Receiver<JobSnapshot>,
    cursor: LogCursor,
    /// State fetched by the tailer itself once the poller is gone
    rechecked: Option<JobSnapshot>,
}

impl LogTailer {
    /// Creates a tailer reading the job state from `state`
    pub fn new(
        api: Arc<dyn TransferApi>,
        job_id: JobId,
        config: MonitorConfig,
        events: mpsc::UnboundedSender<MonitorEvent>,
        state: watch::Receiver<JobSnapshot>,
    ) -> Self {
        Self {
            api,
            job_id,
            config,
            events,
            state,
            cursor: LogCursor::new(),
            rechecked: None,
        }
    }

    /// Runs the tailing loop
    ///
    /// Non-empty windows are followed by an immediate re-fetch, draining any
    /// backlog. An empty window ends the loop only if the job was already
    /// terminal before that fetch was issued; a job that turned terminal while
    /// the fetch was in flight gets one more immediate fetch, catching a final
    /// flush of entries.
    pub async fn run(mut self, cancel: CancellationToken) {
        info!("Tailing log of transfer {}", self.job_id);

        loop {
            let terminal_before = self.terminal_seen();
            let from = self.cursor.next();

            let api = &self.api;
            let job_id = &self.job_id;
            let fetched = fetch_with_retry(&self.config, &cancel, "transfer log", || {
                api.get_transfer_log(job_id, from)
            })
            .await;

            let window = match fetched {
                Some(Ok(window)) => window,
                Some(Err(e)) => {
                    self.fail(e);
                    break;
                }
                None => {
                    debug!("Log tailing of transfer {} cancelled", self.job_id);
                    return;
                }
            };

            match self.cursor.accept(&window) {
                Err(e) => {
                    self.fail(ClientError::server(200, format!("Malformed log page: {}", e)));
                    break;
                }
                Ok(0) => {
                    if terminal_before {
                        info!(
                            "Log of transfer {} complete at {} entries",
                            self.job_id,
                            self.cursor.next()
                        );
                        break;
                    }

                    match self.observe_terminal().await {
                        Ok(true) => {
                            debug!(
                                "Transfer {} turned terminal, fetching log once more",
                                self.job_id
                            );
                        }
                        Ok(false) => {
                            if !sleep_or_cancel(self.config.log_interval, &cancel).await {
                                return;
                            }
                        }
                        Err(e) => {
                            self.fail(e);
                            break;
                        }
                    }
                }
                Ok(count) => {
                    debug!(
                        "Appending {} log entries of transfer {} (next index {})",
                        count,
                        self.job_id,
                        self.cursor.next()
                    );
                    if self.events.send(MonitorEvent::LogAppended(window.entries)).is_err() {
                        return;
                    }
                }
            }
        }

        let _ = self.events.send(MonitorEvent::Finished(Component::LogTailer));
    }

    /// Terminal state as already known, without any network access
    fn terminal_seen(&self) -> bool {
        self.state.borrow().is_terminal()
            || self.rechecked.as_ref().is_some_and(JobSnapshot::is_terminal)
    }

    /// Terminal state, re-checked against the runner when the poller has stopped
    async fn observe_terminal(&mut self) -> Result<bool, ClientError> {
        if self.terminal_seen() {
            return Ok(true);
        }

        // The poller still runs and will publish the terminal state when it comes.
        if self.state.has_changed().is_ok() {
            return Ok(false);
        }

        debug!(
            "Status poller of transfer {} stopped, re-checking state",
            self.job_id
        );
        let snapshot = self.api.get_transfer(&self.job_id).await?;
        let terminal = snapshot.is_terminal();
        self.rechecked = Some(snapshot);
        Ok(terminal)
    }

    fn fail(&self, error: ClientError) {
        warn!("Stopped tailing log of transfer {}: {}", self.job_id, error);
        let _ = self.events.send(MonitorEvent::LogFailed(error));
    }
}

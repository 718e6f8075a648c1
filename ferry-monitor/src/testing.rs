//! Scripted transfer runner for loop tests

use async_trait::async_trait;
use ferry_client::{ClientError, Result, TransferApi};
use ferry_core::domain::job::{JobId, JobSnapshot, JobState};
use ferry_core::domain::log::{LogEntry, LogWindow, Segment, SegmentFormat};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

use crate::event::MonitorEvent;

/// Makes the job terminal and flushes entries right after answering a log request
struct FinishHook {
    on_request: usize,
    flush: u64,
    state: watch::Sender<JobSnapshot>,
    snapshot: JobSnapshot,
}

/// In-memory runner serving one job
///
/// State responses are played in order; the last one repeats. The log behaves
/// like the real runner's: pages of at most `page_limit` entries, and an empty
/// page at the end of the log for any index past it.
pub(crate) struct FakeRunner {
    states: Mutex<VecDeque<Result<JobSnapshot>>>,
    status_calls: AtomicUsize,
    log: Mutex<Vec<LogEntry>>,
    page_limit: u64,
    log_requests: Mutex<Vec<u64>>,
    log_failures: Mutex<VecDeque<ClientError>>,
    finish: Mutex<Option<FinishHook>>,
    rewind_after: Mutex<Option<usize>>,
}

impl FakeRunner {
    pub(crate) fn new(
        states: Vec<Result<JobSnapshot>>,
        log_len: u64,
        page_limit: u64,
    ) -> Arc<Self> {
        Arc::new(Self {
            states: Mutex::new(states.into()),
            status_calls: AtomicUsize::new(0),
            log: Mutex::new(entries(0, log_len)),
            page_limit,
            log_requests: Mutex::new(Vec::new()),
            log_failures: Mutex::new(VecDeque::new()),
            finish: Mutex::new(None),
            rewind_after: Mutex::new(None),
        })
    }

    pub(crate) fn with_states(states: Vec<Result<JobSnapshot>>) -> Arc<Self> {
        Self::new(states, 0, 100)
    }

    pub(crate) fn with_log(log_len: u64, page_limit: u64) -> Arc<Self> {
        Self::new(
            vec![Ok(JobSnapshot::new(JobState::from("RUNNING")))],
            log_len,
            page_limit,
        )
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn log_requests(&self) -> Vec<u64> {
        self.log_requests.lock().unwrap().clone()
    }

    pub(crate) fn set_state(&self, state: Result<JobSnapshot>) {
        *self.states.lock().unwrap() = VecDeque::from(vec![state]);
    }

    pub(crate) fn push_entries(&self, count: u64) {
        let mut log = self.log.lock().unwrap();
        let start = log.len() as u64;
        log.extend(entries(start, start + count));
    }

    pub(crate) fn fail_next_log_request(&self, error: ClientError) {
        self.log_failures.lock().unwrap().push_back(error);
    }

    pub(crate) fn finish_on_log_request(
        &self,
        on_request: usize,
        flush: u64,
        state: watch::Sender<JobSnapshot>,
        snapshot: JobSnapshot,
    ) {
        *self.finish.lock().unwrap() = Some(FinishHook {
            on_request,
            flush,
            state,
            snapshot,
        });
    }

    /// Requests after the `n`-th are served from one index earlier than asked
    pub(crate) fn rewind_after_log_request(&self, n: usize) {
        *self.rewind_after.lock().unwrap() = Some(n);
    }

    fn page(&self, from: u64) -> LogWindow {
        let log = self.log.lock().unwrap();
        let size = log.len() as u64;
        if from > size {
            return LogWindow::empty(size);
        }
        let to = (from + self.page_limit).min(size);
        LogWindow {
            from_index: from,
            to_index: to,
            entries: log[from as usize..to as usize].to_vec(),
        }
    }
}

#[async_trait]
impl TransferApi for FakeRunner {
    async fn get_transfer(&self, _job_id: &JobId) -> Result<JobSnapshot> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let mut states = self.states.lock().unwrap();
        if states.len() > 1 {
            states.pop_front().unwrap()
        } else {
            states.front().cloned().unwrap()
        }
    }

    async fn get_transfer_log(&self, _job_id: &JobId, from: u64) -> Result<LogWindow> {
        let request = {
            let mut requests = self.log_requests.lock().unwrap();
            requests.push(from);
            requests.len()
        };

        if let Some(error) = self.log_failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        let rewind = self
            .rewind_after
            .lock()
            .unwrap()
            .is_some_and(|n| request > n);
        let window = self.page(if rewind { from.saturating_sub(1) } else { from });

        let mut finish = self.finish.lock().unwrap();
        if finish.as_ref().is_some_and(|h| h.on_request == request) {
            let hook = finish.take().unwrap();
            self.push_entries(hook.flush);
            hook.state.send_replace(hook.snapshot);
        }

        Ok(window)
    }
}

/// Entries `[from, to)` as the runner would number them
pub(crate) fn entries(from: u64, to: u64) -> Vec<LogEntry> {
    (from..to)
        .map(|index| LogEntry {
            index,
            timestamp_millis: 1_553_000_000_000 + index as i64,
            thread: "transfer-1".to_string(),
            marker: Some("INFO".to_string()),
            segments: vec![
                Segment::plain("Transferred chunk "),
                Segment::new(SegmentFormat::Chunk, index.to_string()),
            ],
        })
        .collect()
}

/// Everything currently queued on an event channel
pub(crate) fn collect_events(rx: &mut mpsc::UnboundedReceiver<MonitorEvent>) -> Vec<MonitorEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// All appended log entries, in the order they were surfaced
pub(crate) fn entries_of(events: &[MonitorEvent]) -> Vec<LogEntry> {
    events
        .iter()
        .filter_map(|event| match event {
            MonitorEvent::LogAppended(entries) => Some(entries.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}

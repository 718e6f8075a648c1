//! Events emitted by the monitor loops

use ferry_client::ClientError;
use ferry_core::domain::job::JobSnapshot;
use ferry_core::domain::log::LogEntry;
use std::fmt;

/// Which loop an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    StatusPoller,
    LogTailer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::StatusPoller => write!(f, "status poller"),
            Component::LogTailer => write!(f, "log tailer"),
        }
    }
}

/// Something a display should react to
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// The job's state or fail cause differs from the last one surfaced
    StateChanged(JobSnapshot),

    /// New log entries, in index order, directly following the previous batch
    LogAppended(Vec<LogEntry>),

    /// The status loop failed and stopped
    StatusFailed(ClientError),

    /// The log loop failed and stopped
    LogFailed(ClientError),

    /// A loop reached its stopping condition
    Finished(Component),
}

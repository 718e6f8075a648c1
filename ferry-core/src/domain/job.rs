//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a transfer job
///
/// Supplied by whoever created the job; never generated on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Transfer job state
///
/// Only the terminal states are known to the client. Every other state name is
/// owned by the runner and carried through verbatim as [`JobState::Active`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Completed,
    Failed,
    Aborted,
    Active(String),
}

impl JobState {
    /// Once terminal, a job's state never changes again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Active(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobState::Completed => "COMPLETED",
            JobState::Failed => "FAILED",
            JobState::Aborted => "ABORTED",
            JobState::Active(name) => name,
        }
    }
}

impl From<String> for JobState {
    fn from(name: String) -> Self {
        match name.as_str() {
            "COMPLETED" => JobState::Completed,
            "FAILED" => JobState::Failed,
            "ABORTED" => JobState::Aborted,
            _ => JobState::Active(name),
        }
    }
}

impl From<&str> for JobState {
    fn from(name: &str) -> Self {
        JobState::from(name.to_string())
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Active(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a transfer job
///
/// Structure returned by `GET /api/transfers/{id}`. Fields the runner sends
/// beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    #[serde(default, alias = "transferId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub state: JobState,
    #[serde(default)]
    pub fail_cause: Option<String>,
}

impl JobSnapshot {
    pub fn new(state: JobState) -> Self {
        Self {
            id: None,
            state,
            fail_cause: None,
        }
    }

    pub fn with_fail_cause(mut self, cause: impl Into<String>) -> Self {
        self.fail_cause = Some(cause.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Fail cause prepared for display
    ///
    /// Causes usually look like `some.ExceptionType: detail`; the detail is
    /// moved onto an indented continuation line.
    pub fn formatted_fail_cause(&self) -> Option<String> {
        self.fail_cause
            .as_deref()
            .map(|cause| cause.replacen(':', ":\n    ", 1))
    }
}

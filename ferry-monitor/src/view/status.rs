//! Latest-status display

use ferry_client::ClientError;
use ferry_core::domain::job::{JobSnapshot, JobState};

/// Latest known state of a transfer
///
/// Every update overwrites the previous one; nothing is kept as history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    state: JobState,
    fail_cause: Option<String>,
    error: Option<String>,
}

impl StatusView {
    pub fn new(initial: &JobSnapshot) -> Self {
        let mut view = Self {
            state: initial.state.clone(),
            fail_cause: None,
            error: None,
        };
        view.apply(initial);
        view
    }

    /// Shows a new snapshot, clearing the fail cause when the snapshot has none
    pub fn apply(&mut self, snapshot: &JobSnapshot) {
        self.state = snapshot.state.clone();
        self.fail_cause = snapshot.formatted_fail_cause();
        self.error = None;
    }

    /// Shows a fetch failure next to the last known state
    pub fn fail(&mut self, error: &ClientError) {
        self.error = Some(error.user_message().to_string());
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn fail_cause(&self) -> Option<&str> {
        self.fail_cause.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites() {
        let mut view = StatusView::new(&JobSnapshot::new(JobState::from("RUNNING")));
        assert_eq!(view.fail_cause(), None);

        view.apply(&JobSnapshot::new(JobState::Failed).with_fail_cause("IOException: gone"));
        assert_eq!(view.state(), &JobState::Failed);
        assert_eq!(view.fail_cause(), Some("IOException:\n     gone"));

        view.apply(&JobSnapshot::new(JobState::Completed));
        assert_eq!(view.fail_cause(), None);
    }

    #[test]
    fn test_fail_keeps_state() {
        let mut view = StatusView::new(&JobSnapshot::new(JobState::from("RUNNING")));
        view.fail(&ClientError::Transport("reset".to_string()));
        assert_eq!(view.state(), &JobState::from("RUNNING"));
        assert_eq!(view.error(), Some("can't perform request to server"));
    }
}

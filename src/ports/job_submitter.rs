use std::path::Path;

use crate::domain::AppError;

/// Result of handing a job card to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionStatus {
    /// Exit code of the submission command. `None` when it was killed by a signal.
    pub exit_code: Option<i32>,
}

impl SubmissionStatus {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for running the scheduler's submission command.
pub trait JobSubmitter {
    /// Run `<submit_cmd> <script>` and report how it exited.
    ///
    /// A non-zero exit is not an error; only failing to start the command is.
    fn submit(&self, submit_cmd: &str, script: &Path) -> Result<SubmissionStatus, AppError>;
}

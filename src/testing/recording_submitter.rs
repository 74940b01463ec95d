//! Test double for `JobSubmitter` that records calls instead of running them.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{JobSubmitter, SubmissionStatus};

#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    exit_code: i32,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report this exit code for every submission.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl JobSubmitter for RecordingSubmitter {
    fn submit(&self, submit_cmd: &str, script: &Path) -> Result<SubmissionStatus, AppError> {
        self.calls.lock().unwrap().push((submit_cmd.to_string(), script.to_path_buf()));
        Ok(SubmissionStatus { exit_code: Some(self.exit_code) })
    }
}

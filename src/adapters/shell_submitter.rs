//! Job submission through the system shell.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{JobSubmitter, SubmissionStatus};

/// Runs `<submit_cmd> <script>` with `sh -c`.
///
/// `submit_cmd` may carry its own arguments (`sbatch --parsable`), so it is passed
/// to the shell unquoted. The script path is single-quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSubmitter;

impl JobSubmitter for ShellSubmitter {
    fn submit(&self, submit_cmd: &str, script: &Path) -> Result<SubmissionStatus, AppError> {
        let command_line = format!("{} {}", submit_cmd, shell_quote(&script.display().to_string()));
        debug!(command = %command_line, "Running submission command");

        let status = Command::new("sh").arg("-c").arg(&command_line).status().map_err(|e| {
            AppError::SubmitError { command: command_line.clone(), details: e.to_string() }
        })?;

        Ok(SubmissionStatus { exit_code: status.code() })
    }
}

fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

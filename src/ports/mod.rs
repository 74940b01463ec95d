mod environment;
mod filesystem;
mod job_submitter;

pub use environment::EnvironmentPort;
pub use filesystem::FilesystemPort;
pub use job_submitter::{JobSubmitter, SubmissionStatus};

//! Filesystem operations used by configuration loading and job card output.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading configuration files and writing job cards.
pub trait FilesystemPort {
    /// Read a file as UTF-8 text.
    ///
    /// A missing file is reported as `AppError::ConfigNotFound`.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Write content and mark the file executable (Unix only).
    fn write_executable(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;
}

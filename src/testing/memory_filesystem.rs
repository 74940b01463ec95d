//! In-memory implementation of `FilesystemPort` for unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::FilesystemPort;

#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    executables: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn is_executable(&self, path: impl AsRef<Path>) -> bool {
        self.executables.lock().unwrap().contains(path.as_ref())
    }
}

impl FilesystemPort for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| AppError::ConfigNotFound(path.display().to_string()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn write_executable(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.write_file(path, content)?;
        self.executables.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

//! Shared testing utilities for uwconf CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory of every invocation.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `uwconf` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("uwconf").expect("Failed to locate uwconf binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir().join(name)).expect("Failed to read test file")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.work_dir().join(name).exists()
    }
}

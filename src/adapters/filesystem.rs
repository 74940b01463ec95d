//! Local filesystem adapter.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::FilesystemPort;

/// `FilesystemPort` over the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl FilesystemPort for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::ConfigNotFound(path.display().to_string()),
            _ => AppError::from(err),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(AppError::from)
    }

    fn write_executable(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.write_file(path, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = TempDir::new().unwrap();
        let result = LocalFilesystem.read_file(&dir.path().join("absent.yaml"));

        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/job.sh");

        LocalFilesystem.write_file(&path, "echo hi\n").unwrap();

        assert!(LocalFilesystem.file_exists(&path));
        assert_eq!(LocalFilesystem.read_file(&path).unwrap(), "echo hi\n");
    }

    #[cfg(unix)]
    #[test]
    fn executable_scripts_get_mode_755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.sh");

        LocalFilesystem.write_executable(&path, "#!/bin/bash\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

//! Workflow configuration loading.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, ConfigMapping};
use crate::ports::FilesystemPort;

/// Read and merge configuration files in order.
///
/// The first file is the base; each later file overrides shared keys.
pub fn load_config<F: FilesystemPort>(
    filesystem: &F,
    paths: &[PathBuf],
) -> Result<ConfigMapping, AppError> {
    if paths.is_empty() {
        return Err(AppError::config_error("At least one configuration file is required"));
    }

    let mut merged = ConfigMapping::new();
    for path in paths {
        let origin = path.display().to_string();
        let content = filesystem.read_file(path)?;
        let mapping = ConfigMapping::from_yaml_str(&content, &origin)?;
        debug!(path = %origin, keys = mapping.len(), "Loaded configuration");
        merged.merge(mapping);
    }

    Ok(merged)
}

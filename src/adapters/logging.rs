//! `tracing` subscriber setup.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::domain::{AppError, LoggingOptions};

/// Install the global subscriber: stderr console, plus a file mirror when requested.
///
/// `RUST_LOG` is ignored; the level comes from `options` only.
pub fn init_logging(options: &LoggingOptions) -> Result<(), AppError> {
    let directive = options.level.filter_directive();

    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(options.colored)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(directive));

    let file_layer = match &options.log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(EnvFilter::new(directive)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialise logging: {}", e)))
}

use std::io;

use thiserror::Error;

/// Library-wide error type for uwconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// A required configuration key is absent.
    #[error("Missing required key '{0}' in configuration")]
    MissingKey(String),

    /// Scheduler name has no registered adapter.
    #[error("'{name}' is not a supported scheduler. Supported schedulers: {available}")]
    UnsupportedScheduler { name: String, available: String },

    /// Scheduler resources are missing required attributes.
    #[error("Missing required scheduler attributes: [{}]", .0.join(", "))]
    MissingSchedulerAttributes(Vec<String>),

    /// Log level is not one of the supported names.
    #[error("'{level}' is an unknown logging level. Supported levels: {supported}")]
    InvalidLogLevel { level: String, supported: String },

    /// Runtime assignment (`NAME.KEY=VALUE`) is malformed.
    #[error("Invalid assignment '{0}': expected NAME=VALUE with a dotted NAME")]
    InvalidAssignment(String),

    /// Submission command could not be started.
    #[error("Failed to run submission command '{command}': {details}")]
    SubmitError { command: String, details: String },

    /// Failed to serialize a resolved configuration.
    #[error("Failed to serialize configuration: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit states.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::UnsupportedScheduler { .. }
            | AppError::MissingSchedulerAttributes(_)
            | AppError::InvalidLogLevel { .. }
            | AppError::InvalidAssignment(_)
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) | AppError::MissingKey(_) => io::ErrorKind::NotFound,
            AppError::SubmitError { .. } => io::ErrorKind::Other,
        }
    }
}

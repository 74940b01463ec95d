//! File handler registry.
//!
//! Workflow tasks name their data movement as `<source>_<destination>` (or a
//! single protocol when both ends share it). The registry only picks the handler
//! variant; moving bytes is left to whoever consumes the descriptor.

use std::fmt;

use tracing::debug;

/// Storage protocol on one end of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    File,
    S3,
}

/// Registered file handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferHandler {
    FileFile,
    FileS3,
    S3File,
    S3S3,
    S3,
    File,
}

impl TransferHandler {
    pub const ALL: [TransferHandler; 6] = [
        TransferHandler::FileFile,
        TransferHandler::FileS3,
        TransferHandler::S3File,
        TransferHandler::S3S3,
        TransferHandler::S3,
        TransferHandler::File,
    ];

    /// Handler used when a name has no registry entry.
    pub const DEFAULT: TransferHandler = TransferHandler::FileFile;

    pub fn name(self) -> &'static str {
        match self {
            TransferHandler::FileFile => "file_file",
            TransferHandler::FileS3 => "file_s3",
            TransferHandler::S3File => "s3_file",
            TransferHandler::S3S3 => "s3_s3",
            TransferHandler::S3 => "s3",
            TransferHandler::File => "file",
        }
    }

    /// Look up a handler by name, falling back to `DEFAULT`.
    pub fn lookup(name: &str) -> Self {
        let wanted = name.trim().to_lowercase();
        match Self::ALL.into_iter().find(|handler| handler.name() == wanted) {
            Some(handler) => handler,
            None => {
                debug!(name, fallback = Self::DEFAULT.name(), "Unknown file handler");
                Self::DEFAULT
            }
        }
    }

    pub fn source(self) -> Protocol {
        match self {
            TransferHandler::FileFile | TransferHandler::FileS3 | TransferHandler::File => {
                Protocol::File
            }
            TransferHandler::S3File | TransferHandler::S3S3 | TransferHandler::S3 => Protocol::S3,
        }
    }

    pub fn destination(self) -> Protocol {
        match self {
            TransferHandler::FileFile | TransferHandler::S3File | TransferHandler::File => {
                Protocol::File
            }
            TransferHandler::FileS3 | TransferHandler::S3S3 | TransferHandler::S3 => Protocol::S3,
        }
    }
}

impl fmt::Display for TransferHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

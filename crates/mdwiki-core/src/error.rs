//! Error handling for wiki operations
//!
//! Provides typed errors with descriptive messages and recovery
//! suggestions. A missing entry is not an error anywhere in this crate:
//! lookups return `Option` and page operations return "missing" payloads
//! with suggestions instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::forms::ValidationError;

/// Errors that can occur during wiki operations
#[derive(Error, Debug)]
pub enum WikiError {
    /// Create refused because the title already resolves to an entry
    #[error("An entry titled '{title}' already exists")]
    AlreadyExists { title: String },

    /// Random pick requested while the store holds no entries
    #[error("The wiki has no entries yet")]
    EmptyStore,

    /// Malformed user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to create the entries directory
    #[error("Failed to create entries directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read an entry file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write an entry file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WikiError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind (permission, disk full, etc.)
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => WikiError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_disk_full_error(&error) => WikiError::DiskFull {
                path,
                source: error,
            },
            _ => WikiError::ReadError {
                path,
                source: error,
            },
        }
    }

    /// Get a recovery suggestion for this error, if one applies
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            WikiError::AlreadyExists { .. } => {
                Some("Pick a different title, or use `edit` to change the existing entry.")
            }
            WikiError::EmptyStore => Some("Create an entry first with `new <title>`."),
            WikiError::DiskFull { .. } => Some("Free up disk space and try again."),
            WikiError::PermissionDenied { .. } => {
                Some("Check file and directory permissions for the entries directory.")
            }
            WikiError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for wiki operations
pub type WikiResult<T> = Result<T, WikiError>;

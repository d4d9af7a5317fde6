//! File system errors
//!
//! Constructors take the failing path and the underlying error so call sites
//! can stay a single `map_err`.

use std::fmt::Display;
use std::path::Path;

use super::AeError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl Display) -> AeError {
    AeError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl Display) -> AeError {
    AeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a symlink creation error
pub fn symlink_failed(link: &Path, target: &Path, reason: impl Display) -> AeError {
    AeError::SymlinkFailed {
        link: link.display().to_string(),
        target: target.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a removal error
pub fn remove_failed(path: &Path, reason: impl Display) -> AeError {
    AeError::RemoveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AeError {
    AeError::IoError {
        message: message.into(),
    }
}

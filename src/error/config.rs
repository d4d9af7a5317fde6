//! Tool definition errors
//!
//! Definitions come from the embedded `tools.yaml` or from override files, so
//! constructors take an origin label rather than a path.

use std::fmt::Display;

use super::AeError;

/// A `tools.yaml` that could not be read
pub fn read_failed(origin: impl Into<String>, reason: impl Display) -> AeError {
    AeError::ConfigReadFailed {
        path: origin.into(),
        reason: reason.to_string(),
    }
}

/// A `tools.yaml` that is not valid YAML or does not match the schema
pub fn parse_failed(origin: impl Into<String>, reason: impl Display) -> AeError {
    AeError::ConfigParseFailed {
        path: origin.into(),
        reason: reason.to_string(),
    }
}

pub fn invalid(message: impl Into<String>) -> AeError {
    AeError::ConfigInvalid {
        message: message.into(),
    }
}

/// A definition that parsed but names an unusable path or template
pub fn tool_invalid(key: &str, problem: impl Display) -> AeError {
    invalid(format!("tool '{key}': {problem}"))
}

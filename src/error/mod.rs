//! Error types and handling for ae
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Tool and artifact lookup errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod catalog;
pub mod config;
pub mod fs;

pub use catalog::{
    command_not_found, invalid_scope, manifest_missing, skill_not_found, unknown_tool,
};
pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed, tool_invalid,
};
pub use fs::{
    io_error, read_failed as file_read_failed, remove_failed, symlink_failed,
    write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ae operations
#[derive(Error, Diagnostic, Debug)]
pub enum AeError {
    // Catalog errors
    #[error("Unknown tool: {key}")]
    #[diagnostic(
        code(ae::tool::unknown),
        help("Run 'ae list' to see the tools ae can install to")
    )]
    UnknownTool { key: String },

    #[error("Unknown scope: {value}")]
    #[diagnostic(code(ae::scope::invalid), help("Valid scopes: global, local, both"))]
    InvalidScope { value: String },

    #[error("Command not found: {name}")]
    #[diagnostic(code(ae::catalog::command_not_found))]
    CommandNotFound { name: String },

    #[error("Skill not found: {name}")]
    #[diagnostic(code(ae::catalog::skill_not_found))]
    SkillNotFound { name: String },

    #[error("SKILL.md not found in {path}")]
    #[diagnostic(
        code(ae::cache::manifest_missing),
        help("Run 'ae install' again to repopulate the cache")
    )]
    SkillManifestMissing { path: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(ae::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Configuration errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(ae::config::home_not_found),
        help("Set the HOME environment variable")
    )]
    HomeDirNotFound,

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(ae::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(ae::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(ae::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(ae::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(ae::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to link {link} -> {target}: {reason}")]
    #[diagnostic(code(ae::fs::symlink_failed))]
    SymlinkFailed {
        link: String,
        target: String,
        reason: String,
    },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(ae::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ae::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AeError {
    fn from(err: std::io::Error) -> Self {
        AeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AeError {
    fn from(err: serde_yaml::Error) -> Self {
        AeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AeError {
    fn from(err: inquire::InquireError) -> Self {
        AeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AeError>;

//! Tool and artifact lookup errors

use super::AeError;

/// Creates an unknown tool error
pub fn unknown_tool(key: impl Into<String>) -> AeError {
    AeError::UnknownTool { key: key.into() }
}

/// Creates an invalid scope error
pub fn invalid_scope(value: impl Into<String>) -> AeError {
    AeError::InvalidScope {
        value: value.into(),
    }
}

/// Creates a command not found error
pub fn command_not_found(name: impl Into<String>) -> AeError {
    AeError::CommandNotFound { name: name.into() }
}

/// Creates a skill not found error
pub fn skill_not_found(name: impl Into<String>) -> AeError {
    AeError::SkillNotFound { name: name.into() }
}

/// Creates a missing skill manifest error for a cached skill directory
pub fn manifest_missing(path: impl Into<String>) -> AeError {
    AeError::SkillManifestMissing { path: path.into() }
}

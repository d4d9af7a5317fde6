//! Per-call install and uninstall results

use std::fmt;

use super::{Location, Scope};
use crate::error::AeError;

/// What a soft error is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// The cache marker file
    CacheReadme,
    Command(String),
    Skill(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::CacheReadme => write!(f, "cache readme"),
            Subject::Command(name) => write!(f, "command {name}"),
            Subject::Skill(name) => write!(f, "skill {name}"),
        }
    }
}

/// A per-artifact failure that did not stop the rest of the operation
#[derive(Debug)]
pub struct ArtifactError {
    pub location: Location,
    pub subject: Subject,
    pub error: AeError,
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.subject, self.location, self.error)
    }
}

/// Aggregate outcome of an install or uninstall call
///
/// Counts are artifacts linked for install and artifacts actually removed for
/// uninstall, summed across every expanded location.
#[derive(Debug)]
pub struct InstallResult {
    pub tool: String,
    pub scope: Scope,
    pub commands: usize,
    pub skills: usize,
    pub errors: Vec<ArtifactError>,
}

impl InstallResult {
    pub fn new(tool: impl Into<String>, scope: Scope) -> Self {
        Self {
            tool: tool.into(),
            scope,
            commands: 0,
            skills: 0,
            errors: Vec::new(),
        }
    }

    /// Total number of artifacts counted
    pub fn total(&self) -> usize {
        self.commands + self.skills
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn push_error(&mut self, location: Location, subject: Subject, error: AeError) {
        tracing::warn!(tool = %self.tool, %location, %subject, "{error}");
        self.errors.push(ArtifactError {
            location,
            subject,
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::command_not_found;

    #[test]
    fn test_new_result_is_empty() {
        let result = InstallResult::new("claude", Scope::Both);
        assert_eq!(result.total(), 0);
        assert!(!result.has_errors());
        assert_eq!(result.scope, Scope::Both);
    }

    #[test]
    fn test_push_error_keeps_order() {
        let mut result = InstallResult::new("claude", Scope::Global);
        result.push_error(
            Location::Global,
            Subject::Command("a".into()),
            command_not_found("a"),
        );
        result.push_error(
            Location::Global,
            Subject::Skill("b".into()),
            command_not_found("b"),
        );

        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].subject, Subject::Command("a".into()));
        assert_eq!(result.errors[1].subject, Subject::Skill("b".into()));
    }

    #[test]
    fn test_artifact_error_display() {
        let err = ArtifactError {
            location: Location::Local,
            subject: Subject::Command("review".into()),
            error: command_not_found("review"),
        };
        assert_eq!(
            err.to_string(),
            "command review (local): Command not found: review"
        );
    }
}

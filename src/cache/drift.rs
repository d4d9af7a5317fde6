//! Cache drift detection
//!
//! Compares what is cached against the artifact source using BLAKE3 digests.

use std::fmt;

use super::CacheStore;
use crate::catalog::ArtifactSource;
use crate::common::fs::list_names;
use crate::domain::Subject;
use crate::error::Result;
use crate::hash::{hash_bytes, hash_directory, hash_file, hash_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftKind {
    /// Cached bytes differ from the source
    Modified,
    /// Cached artifact no longer exists in the source
    Orphaned,
    /// A tool destination exists but its cache entry is gone
    Missing,
}

impl fmt::Display for DriftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftKind::Modified => write!(f, "modified"),
            DriftKind::Orphaned => write!(f, "orphaned"),
            DriftKind::Missing => write!(f, "missing from cache"),
        }
    }
}

/// One cached artifact that does not match the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    pub subject: Subject,
    pub kind: DriftKind,
}

/// Report every cached command and skill that drifted from `source`
///
/// A missing cache directory has nothing to report.
pub fn check_drift(cache: &CacheStore, source: &dyn ArtifactSource) -> Result<Vec<DriftReport>> {
    let mut reports = Vec::new();

    let commands = list_names(&cache.commands_dir(), |entry| {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "md") {
            path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
        } else {
            None
        }
    });
    for name in commands {
        let kind = if source.command_exists(&name) {
            let expected = hash_bytes(&source.read_command(&name)?);
            (hash_file(&cache.command_path(&name))? != expected).then_some(DriftKind::Modified)
        } else {
            Some(DriftKind::Orphaned)
        };
        if let Some(kind) = kind {
            reports.push(DriftReport {
                subject: Subject::Command(name),
                kind,
            });
        }
    }

    let skills = list_names(&cache.skills_dir(), |entry| {
        if entry.path().is_dir() {
            entry.file_name().to_str().map(str::to_string)
        } else {
            None
        }
    });
    for name in skills {
        let kind = if source.skill_exists(&name) {
            let expected = hash_tree(&source.skill_tree(&name)?);
            (hash_directory(&cache.skill_dir(&name))? != expected).then_some(DriftKind::Modified)
        } else {
            Some(DriftKind::Orphaned)
        };
        if let Some(kind) = kind {
            reports.push(DriftReport {
                subject: Subject::Skill(name),
                kind,
            });
        }
    }

    tracing::debug!(cache = %cache.dir().display(), drifted = reports.len(), "drift check");
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DirSource;
    use crate::common::fs::write_file;
    use tempfile::TempDir;

    fn source_fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        write_file(&temp.path().join("commands/review.md"), b"# Review").unwrap();
        write_file(&temp.path().join("skills/lint/SKILL.md"), b"# Lint").unwrap();
        write_file(&temp.path().join("skills/lint/refs/a.md"), b"a").unwrap();
        temp
    }

    fn populated(source: &DirSource, dir: &std::path::Path) -> CacheStore {
        let cache = CacheStore::new(dir);
        cache
            .write_command("review", &source.read_command("review").unwrap())
            .unwrap();
        cache.write_skill(&source.skill_tree("lint").unwrap()).unwrap();
        cache
    }

    #[test]
    fn test_fresh_cache_has_no_drift() {
        let src = source_fixture();
        let source = DirSource::new(src.path());
        let temp = TempDir::new().unwrap();
        let cache = populated(&source, temp.path());

        assert!(check_drift(&cache, &source).unwrap().is_empty());
    }

    #[test]
    fn test_detects_modified_and_orphaned() {
        let src = source_fixture();
        let source = DirSource::new(src.path());
        let temp = TempDir::new().unwrap();
        let cache = populated(&source, temp.path());

        write_file(&cache.skill_dir("lint").join("refs/a.md"), b"edited").unwrap();
        cache.write_command("retired", b"# Old").unwrap();

        let reports = check_drift(&cache, &source).unwrap();
        assert_eq!(
            reports,
            vec![
                DriftReport {
                    subject: Subject::Command("retired".into()),
                    kind: DriftKind::Orphaned,
                },
                DriftReport {
                    subject: Subject::Skill("lint".into()),
                    kind: DriftKind::Modified,
                },
            ]
        );
    }

    #[test]
    fn test_missing_cache_is_clean() {
        let src = source_fixture();
        let source = DirSource::new(src.path());
        let temp = TempDir::new().unwrap();
        let cache = CacheStore::new(temp.path().join("absent"));

        assert!(check_drift(&cache, &source).unwrap().is_empty());
    }
}

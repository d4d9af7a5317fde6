//! Common test utilities for ae integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Tool definitions of the fixture source
///
/// `alpha` takes directory skills, `beta` single-file skills under a
/// different commands directory.
pub const FIXTURE_TOOLS: &str = "\
tools:
  alpha:
    name: Alpha
    global_path: ~/.alpha
    local_path: .alpha
    conventions:
      commands: commands/{name}.md
      skills: skills/{name}/SKILL.md
  beta:
    name: Beta
    global_path: ~/.beta
    local_path: .beta
    conventions:
      commands: prompts/{name}.md
      skills: skills/{name}.md
";

/// An isolated home directory, project directory and artifact source
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub source: PathBuf,
}

impl TestEnv {
    /// Create the environment with the fixture source written out
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        let env = Self {
            home: root.join("home"),
            project: root.join("project"),
            source: root.join("source"),
            temp,
        };
        std::fs::create_dir_all(&env.home).expect("Failed to create home");
        std::fs::create_dir_all(&env.project).expect("Failed to create project");

        env.write_source("tools.yaml", FIXTURE_TOOLS);
        env.write_source("commands/review.md", "# Review");
        env.write_source("commands/plan.md", "# Plan");
        env.write_source("skills/lint/SKILL.md", "# Lint");
        env.write_source("skills/lint/refs/rules.md", "rules");
        env.write_source("skills/docs/SKILL.md", "# Docs");
        env
    }

    /// Write a file into the fixture source
    pub fn write_source(&self, path: &str, content: &str) {
        write(&self.source.join(path), content);
    }

    /// `ae` with HOME, XDG_CONFIG_HOME, the project and the fixture source set
    pub fn ae(&self) -> Command {
        let mut cmd = self.ae_embedded();
        cmd.arg("--source").arg(&self.source);
        cmd
    }

    /// `ae` using the built-in content
    pub fn ae_embedded(&self) -> Command {
        let mut cmd = ae_cmd();
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("AE_SOURCE")
            .env_remove("AE_LOG")
            .env_remove("CLICOLOR_FORCE")
            .arg("--project")
            .arg(&self.project);
        cmd
    }

    pub fn in_home(&self, path: &str) -> PathBuf {
        self.home.join(path)
    }

    pub fn in_project(&self, path: &str) -> PathBuf {
        self.project.join(path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn ae_cmd() -> Command {
    Command::cargo_bin("ae").expect("ae binary is built")
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Whether `path` is a symlink, broken or not
#[allow(dead_code)]
pub fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

//! Test infrastructure for dep-sync integration tests.

use anyhow::Result;
use dep_sync::config::{Dependency, Options};
use dep_sync::git::run_git;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A local git repository standing in for a remote source.
/// Its filesystem path doubles as the clone URL. Automatically cleaned up
/// when dropped.
pub struct SourceRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl SourceRepo {
    /// Creates a source repository with an initial commit on `branch`.
    pub fn new(branch: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        run_git(&path, &["init", "-b", branch])?;
        run_git(&path, &["config", "user.email", "test@example.com"])?;
        run_git(&path, &["config", "user.name", "Test User"])?;

        std::fs::write(path.join("README.md"), "# Source Repo\n")?;
        run_git(&path, &["add", "README.md"])?;
        run_git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Creates an additional branch without switching away from the
    /// current one.
    #[allow(dead_code)]
    pub fn create_branch(&self, branch: &str) -> Result<()> {
        run_git(&self.path, &["branch", branch])?;
        Ok(())
    }

    /// Commits a new file so existing clones fall behind until they pull.
    #[allow(dead_code)]
    pub fn add_commit(&self, file: &str) -> Result<()> {
        std::fs::write(self.path.join(file), "content\n")?;
        run_git(&self.path, &["add", file])?;
        run_git(&self.path, &["commit", "-m", &format!("Add {}", file)])?;
        Ok(())
    }

    /// The clone URL for this source (its local path).
    pub fn url(&self) -> String {
        self.path
            .to_str()
            .expect("temp path is valid UTF-8")
            .to_string()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builds a descriptor pointing a relative `target` at `source`.
pub fn dependency(name: &str, source: &SourceRepo, branch: &str, target: &str) -> Dependency {
    Dependency {
        name: name.to_string(),
        url: source.url(),
        branch: branch.to_string(),
        target: PathBuf::from(target),
    }
}

/// Options used by tests: quiet, so git output is the only noise.
pub fn test_options() -> Options {
    Options { quiet: true }
}

/// Current branch of a checkout, for asserting what a clone checked out.
#[allow(dead_code)]
pub fn current_branch(path: &Path) -> Result<String> {
    run_git(path, &["rev-parse", "--abbrev-ref", "HEAD"])
}

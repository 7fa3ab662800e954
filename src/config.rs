//! Manifest loading and runtime options.
//!
//! The manifest is a JSON file with a top-level `repositories` array; each
//! entry describes one dependent repository to synchronize.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One manifest entry describing a dependent repository.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    /// Identifier used in log lines.
    pub name: String,
    /// Source repository address passed to `git clone`.
    pub url: String,
    /// Branch checked out on clone.
    pub branch: String,
    /// Local checkout path, resolved relative to the working directory.
    pub target: PathBuf,
}

/// The parsed manifest file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub repositories: Vec<Dependency>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// Fails if the file is missing, unreadable, not valid JSON, or the
    /// `repositories` field is absent. No sync work happens before this
    /// succeeds.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse manifest '{}'", path.display()))
    }
}

/// Runtime options derived from CLI arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Suppresses informational log lines; errors still surface.
    pub quiet: bool,
}

impl Options {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

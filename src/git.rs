//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting. Clone and pull inherit
//! the parent's standard streams so git's own progress output stays visible;
//! `run_git` captures output for queries and test infrastructure.

use crate::constants::GIT_PROGRAM;
use anyhow::Context;
use std::path::Path;

/// Runs a git command in `dir` and returns its trimmed stdout.
pub fn run_git(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new(GIT_PROGRAM)
        .current_dir(dir)
        .args(args)
        .output()
        .context("Failed to spawn git command")?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr)
    }
}

/// Runs a git command in `dir` with inherited stdio, waiting for completion.
/// Child output interleaves with the driver's own log lines.
fn run_git_inherited(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let status = std::process::Command::new(GIT_PROGRAM)
        .current_dir(dir)
        .args(args)
        .status()
        .context("Failed to spawn git command")?;

    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("git {} failed with {}", args.join(" "), status)
    }
}

/// Rejects values git would misread as an option or that cannot be passed
/// as a single process argument.
fn validate_ref_arg(kind: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() || value.contains('\0') || value.contains('\n') || value.starts_with('-') {
        anyhow::bail!("Invalid {}: {:?}", kind, value);
    }
    Ok(())
}

/// Clones `url` at `branch` into `target`. The parent of `target` is used
/// as the child's working directory so relative targets land where the
/// manifest says.
pub fn clone(base: &Path, url: &str, branch: &str, target: &Path) -> anyhow::Result<()> {
    validate_ref_arg("branch name", branch)?;
    validate_ref_arg("repository url", url)?;

    let target = target
        .to_str()
        .with_context(|| format!("Target path is not valid UTF-8: {}", target.display()))?;

    run_git_inherited(base, &["clone", "--branch", branch, url, target])
        .with_context(|| format!("Failed to clone '{}'", url))
}

/// Pulls the latest changes for the checkout at `target`.
pub fn pull(target: &Path) -> anyhow::Result<()> {
    run_git_inherited(target, &["pull"])
        .with_context(|| format!("Failed to pull in '{}'", target.display()))
}

//! Application-wide constants.
//!
//! Centralized configuration values to avoid magic strings throughout the codebase.

/// Default manifest file name, looked up relative to the working directory.
pub const MANIFEST_FILE: &str = "dependencies.json";

/// Name of the version-control binary invoked for clone/pull operations.
pub const GIT_PROGRAM: &str = "git";

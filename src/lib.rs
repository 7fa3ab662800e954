//! Dependency repository synchronizer library.
//!
//! This crate reads a JSON manifest describing dependent git repositories
//! and brings each one up to date by:
//! - Cloning the repository at its configured branch when the target path
//!   does not exist yet
//! - Pulling the latest changes when it does
//!
//! Repositories are processed strictly in manifest order; the first
//! failure aborts the run.

pub mod config;
pub mod constants;
pub mod git;
pub mod output;
pub mod sync;

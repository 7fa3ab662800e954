//! Colored status lines for the sync run.
//!
//! One line before each clone/pull, a header naming the manifest, and a
//! single completion line. Git's own output interleaves between these
//! because the child streams are inherited.

use crate::config::Options;
use crate::sync::SyncAction;
use colored::Colorize;
use std::path::Path;

/// Prints the run header naming the manifest and descriptor count.
pub fn print_run_start(options: &Options, manifest: &Path, count: usize) {
    if options.is_quiet() {
        return;
    }
    println!(
        "{}",
        format!(
            "Syncing {} {} from {}",
            count,
            if count == 1 { "repository" } else { "repositories" },
            manifest.display()
        )
        .dimmed()
    );
}

/// Prints the one-line status message before a clone or pull.
pub fn print_sync_start(options: &Options, name: &str, action: SyncAction) {
    if options.is_quiet() {
        return;
    }
    match action {
        SyncAction::Clone => println!("{} {}...", "Cloning".cyan(), name.white().bold()),
        SyncAction::Pull => println!(
            "{} {}...",
            "Pulling latest changes for".cyan(),
            name.white().bold()
        ),
    }
}

/// Prints the final completion line after every descriptor has synced.
pub fn print_complete(options: &Options) {
    if options.is_quiet() {
        return;
    }
    println!("{}", "All dependencies installed.".green().bold());
}

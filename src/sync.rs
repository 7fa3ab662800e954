//! Sequential sync driver: clone-or-pull dispatch per manifest entry.

use crate::config::{Dependency, Options};
use crate::{git, output};
use std::path::{Path, PathBuf};

/// The operation chosen for one descriptor, based solely on whether its
/// target path exists when the descriptor is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Clone,
    Pull,
}

/// Record of one completed sync operation.
#[derive(Debug)]
pub struct SyncRecord {
    pub name: String,
    pub action: SyncAction,
    pub target: PathBuf,
}

/// Decides clone vs. pull for a resolved target path.
#[must_use]
pub fn plan_action(target: &Path) -> SyncAction {
    if target.exists() {
        SyncAction::Pull
    } else {
        SyncAction::Clone
    }
}

/// Synchronizes every descriptor in manifest order.
///
/// Relative targets are resolved against `base` rather than the ambient
/// working directory. The first git failure aborts the run: earlier
/// descriptors stay synced, later ones are never touched.
pub fn sync_all(
    base: &Path,
    repositories: &[Dependency],
    options: &Options,
) -> anyhow::Result<Vec<SyncRecord>> {
    let mut records = Vec::with_capacity(repositories.len());

    for dep in repositories {
        let target = base.join(&dep.target);
        let action = plan_action(&target);
        output::print_sync_start(options, &dep.name, action);

        match action {
            SyncAction::Clone => git::clone(base, &dep.url, &dep.branch, &dep.target)?,
            SyncAction::Pull => git::pull(&target)?,
        }

        records.push(SyncRecord {
            name: dep.name.clone(),
            action,
            target,
        });
    }

    Ok(records)
}

//! Dependency freshness check and automatic synchronization
//!
//! Decides whether the installed dependency set matches the lockfile,
//! and runs the manager's install when it does not. A failed sync is
//! fatal: proceeding with stale dependencies silently corrupts whatever
//! command runs next.

pub mod cache;

use crate::error::{PmError, PmResult};
use crate::exec;
use crate::mapper::MappedCommand;
use crate::registry::ManagerProfile;
use self::cache::SyncCache;
use console::style;
use std::path::Path;
use tracing::{debug, warn};

/// Options for one synchronization pass
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions<'a> {
    pub manager: &'a ManagerProfile,
    pub project_root: &'a Path,
    pub workspace_root: Option<&'a Path>,
    pub dry_run: bool,
    /// Use the manager's reproducible CI install variant
    pub ci_mode: bool,
    /// Install even when the dependency set looks fresh
    pub force: bool,
}

/// Does the dependency set need a fresh install?
///
/// Fresh requires a lockfile digest matching the cache and, for
/// managers with a project-local install directory, that the directory
/// exists. Without any lockfile there is nothing to hash, so the
/// install directory alone decides; managers that install outside the
/// project tree (pip, conda) have no observable signal there and count
/// as fresh rather than forcing an install on every invocation.
pub fn needs_install(
    manager: &ManagerProfile,
    project_root: &Path,
    workspace_root: Option<&Path>,
) -> bool {
    let root = workspace_root.unwrap_or(project_root);
    let local_install = manager.install_dir.map(|dir| root.join(dir).is_dir());

    let Some(lockfile) = manager.find_lockfile(root) else {
        debug!("no lockfile in {}", root.display());
        return local_install == Some(false);
    };

    let current = match cache::hash_file(&lockfile) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("could not hash {}: {e}", lockfile.display());
            return true;
        }
    };

    let cached = cache::read_cache(root, manager.install_dir);
    cached.lockfile_hash != current || local_install == Some(false)
}

/// Run the manager's install in the resolution root when the dependency
/// set is stale (or unconditionally under `force`/`ci_mode`), then
/// record the new lockfile digest.
pub async fn synchronize(opts: SyncOptions<'_>) -> PmResult<()> {
    let root = opts.workspace_root.unwrap_or(opts.project_root);

    if !opts.force
        && !opts.ci_mode
        && !needs_install(opts.manager, opts.project_root, opts.workspace_root)
    {
        debug!("dependencies are fresh, skipping sync");
        return Ok(());
    }

    let table = &opts.manager.commands;
    let entry = if opts.ci_mode {
        table.ci.unwrap_or(table.install)
    } else {
        table.install
    };
    let mapped = MappedCommand::from_table(entry, []);
    let argv = mapped.argv();

    if opts.dry_run {
        println!(
            "[dry-run] Would execute: {} {} (in {})",
            opts.manager.name,
            argv.join(" "),
            root.display()
        );
        return Ok(());
    }

    if !opts.force {
        println!(
            "{} dependencies with {}{}...",
            style("Synchronizing").cyan(),
            opts.manager.name,
            if opts.ci_mode { " (CI mode)" } else { "" }
        );
    }

    let code = exec::run_command(opts.manager.name, &argv, root).await?;
    if code != 0 {
        return Err(PmError::SyncFailed {
            manager: opts.manager.name.to_string(),
            code,
        });
    }

    // A stale record only costs a redundant install later, so cache
    // persistence failures are logged rather than propagated.
    if let Err(e) = record_sync(opts.manager, root) {
        warn!("failed to persist sync cache: {e}");
    }
    Ok(())
}

fn record_sync(manager: &ManagerProfile, root: &Path) -> PmResult<()> {
    let lockfile_hash = match manager.find_lockfile(root) {
        Some(lockfile) => cache::hash_file(&lockfile)?,
        None => None,
    };
    cache::write_cache(
        root,
        manager.install_dir,
        &SyncCache {
            lockfile_hash,
            last_sync: Some(chrono::Utc::now().to_rfc3339()),
        },
    )
}

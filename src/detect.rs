//! Project and package manager detection
//!
//! Resolves, per invocation: the project root, the workspace root if
//! the project sits inside one, and the manager profile governing it.
//! Results are never cached; detection always re-runs.

use crate::config::{self, UserConfig};
use crate::error::{PmError, PmResult};
use crate::manifest;
use crate::registry::{Ecosystem, ManagerProfile, Registry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of detection, owned by a single invocation
#[derive(Debug)]
pub struct DetectionResult<'r> {
    pub manager: &'r ManagerProfile,
    pub project_root: PathBuf,
    pub is_workspace: bool,
    pub workspace_root: Option<PathBuf>,
}

impl DetectionResult<'_> {
    /// Directory the freshness check and workspace-wide commands use
    pub fn check_root(&self) -> &Path {
        self.workspace_root.as_deref().unwrap_or(&self.project_root)
    }
}

/// Detect the manager governing the project containing `start`.
///
/// Resolution order: workspace lockfile, directory heuristics, manifest
/// pin (which overrides both), configured default. Fails only when no
/// project root exists between `start` and the filesystem root.
pub fn detect<'r>(
    start: &Path,
    registry: &'r Registry,
    user_config: &UserConfig,
) -> PmResult<DetectionResult<'r>> {
    let project_root = registry
        .find_project_root(start)
        .ok_or_else(|| PmError::ProjectNotFound(start.to_path_buf()))?;
    debug!("project root: {}", project_root.display());

    let ecosystem = Registry::detect_ecosystem(&project_root);

    let mut candidate: Option<&ManagerProfile> = None;
    let mut workspace_root: Option<PathBuf> = None;

    // Monorepos keep the lockfile at the workspace root, above the
    // individual package manifests. Javascript only; other ecosystems
    // have no shared-lockfile workspace convention we recognize.
    if ecosystem == Some(Ecosystem::Javascript) {
        if let Some((profile, lockfile_dir)) = find_workspace_lockfile(&project_root, registry) {
            candidate = Some(profile);
            if lockfile_dir != project_root {
                debug!("workspace root: {}", lockfile_dir.display());
                workspace_root = Some(lockfile_dir);
            }
        }
    }

    if candidate.is_none() {
        candidate = registry.detect_from_directory(&project_root);
    }

    // An explicit pin in the manifest is the user's unambiguous
    // declaration; it wins over every lockfile heuristic.
    let detection_root = workspace_root.as_deref().unwrap_or(&project_root);
    if let Some(pin) = manifest::read_manager_pin(detection_root) {
        if let Some(pinned) = registry.get(&pin.name) {
            debug!(
                "manifest pins {}{}",
                pin.name,
                pin.version
                    .as_ref()
                    .map(|v| format!("@{v}"))
                    .unwrap_or_default()
            );
            candidate = Some(pinned);
        }
    }

    let manager = match candidate {
        Some(profile) => profile,
        None => config::default_manager(user_config, registry),
    };
    debug!("detected manager: {}", manager.name);

    Ok(DetectionResult {
        manager,
        project_root,
        is_workspace: workspace_root.is_some(),
        workspace_root,
    })
}

/// Bounded upward search for the nearest directory holding any
/// javascript lockfile.
///
/// Ascent rule: move to the parent only while the parent or the
/// grandparent carries the javascript manifest or a workspace marker
/// file. The grandparent clause bridges a manifest-less intermediate
/// directory (a monorepo's `packages/`) without letting the search
/// walk out of the project into unrelated directories.
fn find_workspace_lockfile<'r>(
    project_root: &Path,
    registry: &'r Registry,
) -> Option<(&'r ManagerProfile, PathBuf)> {
    let mut dir = project_root.to_path_buf();

    loop {
        for profile in registry.by_ecosystem(Ecosystem::Javascript) {
            if profile.find_lockfile(&dir).is_some() {
                return Some((profile, dir));
            }
        }

        let parent = dir.parent()?.to_path_buf();
        let in_project =
            holds_js_project(&parent) || parent.parent().is_some_and(holds_js_project);
        if !in_project {
            return None;
        }
        dir = parent;
    }
}

fn holds_js_project(dir: &Path) -> bool {
    dir.join("package.json").is_file() || manifest::is_workspace_root(dir)
}

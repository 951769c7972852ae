//! Manifest file readers
//!
//! Script-name lookups for the mapper and the corepack-style package
//! manager pin for the detector. Unreadable or malformed manifests are
//! treated as empty, never as errors.

use crate::registry::ManagerProfile;
use semver::Version;
use std::fs;
use std::path::Path;
use tracing::debug;

/// An explicit manager pin declared in a manifest (`"npm@10.2.0"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerPin {
    pub name: String,
    pub version: Option<Version>,
}

/// Read the `packageManager` pin (or `devEngines.packageManager.name`)
/// from the package.json in `dir`.
pub fn read_manager_pin(dir: &Path) -> Option<ManagerPin> {
    let raw = fs::read_to_string(dir.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&raw).ok()?;

    let field = manifest
        .get("packageManager")
        .and_then(|v| v.as_str())
        .or_else(|| {
            manifest
                .get("devEngines")
                .and_then(|v| v.get("packageManager"))
                .and_then(|v| v.get("name"))
                .and_then(|v| v.as_str())
        })?;

    let (name, version_part) = match field.split_once('@') {
        Some((name, rest)) => (name, Some(rest)),
        None => (field, None),
    };
    if name.is_empty() {
        return None;
    }

    // Corepack appends an integrity hash after `+`; version parse
    // failures are logged and ignored, the name alone is the pin.
    let version = version_part
        .map(|v| v.split('+').next().unwrap_or(v))
        .and_then(|v| match Version::parse(v) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("unparseable pin version {v:?}: {e}");
                None
            }
        });

    Some(ManagerPin {
        name: name.to_string(),
        version,
    })
}

/// Does the manifest governing `manager` declare a script named `name`?
pub fn has_script(name: &str, project_root: &Path, manager: &ManagerProfile) -> bool {
    let path = project_root.join(manager.manifest_file);
    match manager.manifest_file {
        "package.json" => package_json_has_script(&path, name),
        "pyproject.toml" => pyproject_has_script(&path, name),
        "Pipfile" => pipfile_has_script(&path, name),
        _ => false,
    }
}

fn package_json_has_script(path: &Path, name: &str) -> bool {
    let Ok(raw) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return false;
    };
    manifest
        .get("scripts")
        .and_then(|s| s.get(name))
        .is_some()
}

fn pyproject_has_script(path: &Path, name: &str) -> bool {
    let Some(doc) = read_toml(path) else {
        return false;
    };
    let project_scripts = doc
        .get("project")
        .and_then(|p| p.get("scripts"))
        .and_then(|s| s.get(name))
        .is_some();
    let poetry_scripts = doc
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("scripts"))
        .and_then(|s| s.get(name))
        .is_some();
    project_scripts || poetry_scripts
}

fn pipfile_has_script(path: &Path, name: &str) -> bool {
    read_toml(path)
        .and_then(|doc| doc.get("scripts").and_then(|s| s.get(name)).map(|_| ()))
        .is_some()
}

fn read_toml(path: &Path) -> Option<toml::Value> {
    let raw = fs::read_to_string(path).ok()?;
    toml::from_str(&raw).ok()
}

/// Does the directory's manifest mark it as a workspace root?
pub fn is_workspace_root(dir: &Path) -> bool {
    if dir.join("pnpm-workspace.yaml").is_file() || dir.join("pnpm-workspace.yml").is_file() {
        return true;
    }
    let Ok(raw) = fs::read_to_string(dir.join("package.json")) else {
        return false;
    };
    serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(|m| m.get("workspaces").map(|_| ()))
        .is_some()
}

//! Package manager capability records
//!
//! Each supported manager is a plain data record plus an optional pure
//! function computing manager-specific command overrides. Dispatch is a
//! record lookup, never virtual method resolution, so the manager set
//! stays data-driven and testable in isolation.

use crate::mapper::{MapContext, MappedCommand};
use std::fmt;

/// Supported language ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Javascript,
    Python,
    Rust,
    Ruby,
    Php,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Ruby => "ruby",
            Self::Php => "php",
        };
        write!(f, "{}", name)
    }
}

/// Manager-specific override hook, consulted before the generic table.
///
/// Returning `None` falls through to the generic verb mapping.
pub type OverrideFn = fn(&str, Vec<String>, &MapContext) -> Option<MappedCommand>;

/// Abstract verb to concrete invocation table.
///
/// Entries may carry embedded flags ("install --save-dev"); the first
/// whitespace token is the concrete verb and the rest become leading args.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    /// Full dependency install (bare `install` with no packages)
    pub install: &'static str,
    /// Install named packages
    pub add: &'static str,
    /// Install named packages as dev dependencies
    pub install_dev: Option<&'static str>,
    pub remove: &'static str,
    pub update: &'static str,
    pub list: Option<&'static str>,
    pub outdated: Option<&'static str>,
    /// Run a manifest script by name
    pub run: Option<&'static str>,
    pub exec: Option<&'static str>,
    /// Reproducible install for CI environments
    pub ci: Option<&'static str>,
}

/// Immutable description of one package manager
#[derive(Debug, Clone, Copy)]
pub struct ManagerProfile {
    /// Unique id; also the binary name to invoke
    pub name: &'static str,
    pub ecosystem: Ecosystem,
    /// Human-edited dependency declaration file
    pub manifest_file: &'static str,
    /// Recognized lockfile names, most current first; first match wins
    pub lockfiles: &'static [&'static str],
    pub commands: CommandTable,
    /// Project-local directory the manager installs into (freshness
    /// signal). `None` for managers that install outside the project
    /// tree, such as pip's site-packages or conda's named environments.
    pub install_dir: Option<&'static str>,
    /// Auxiliary files whose presence implies this manager
    pub detect_files: &'static [&'static str],
    pub supports_workspaces: bool,
    pub workspace_marker_files: &'static [&'static str],
    /// The manager's own dev-dependency flag spelling
    pub dev_flag: Option<&'static str>,
    /// Flag (or verb prefix, e.g. yarn's `global`) for global operations
    pub global_flag: Option<&'static str>,
    /// Built-in sub-commands that scripts must not shadow
    pub builtin_verbs: &'static [&'static str],
    /// Argv prefix of the manager's package runner (npx, yarn dlx, ...)
    pub runner: Option<&'static [&'static str]>,
    pub overrides: Option<OverrideFn>,
}

impl ManagerProfile {
    /// First lockfile name that exists in `dir`, as a full path
    pub fn find_lockfile(&self, dir: &std::path::Path) -> Option<std::path::PathBuf> {
        self.lockfiles
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ecosystem_display() {
        assert_eq!(Ecosystem::Javascript.to_string(), "javascript");
        assert_eq!(Ecosystem::Python.to_string(), "python");
    }

    #[test]
    fn find_lockfile_honors_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bun.lock"), "").unwrap();
        fs::write(dir.path().join("bun.lockb"), "").unwrap();

        let registry = Registry::with_defaults();
        let bun = registry.get("bun").unwrap();
        let found = bun.find_lockfile(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "bun.lock");
    }

    #[test]
    fn find_lockfile_absent() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::with_defaults();
        assert!(registry.get("npm").unwrap().find_lockfile(dir.path()).is_none());
    }
}

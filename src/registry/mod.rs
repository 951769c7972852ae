//! Catalog of known package manager profiles
//!
//! The registry is constructed once at startup and passed by reference
//! to the detector and mapper. Registration order within an ecosystem
//! determines detection priority.

mod javascript;
pub mod profile;
mod python;

pub use profile::{CommandTable, Ecosystem, ManagerProfile, OverrideFn};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files whose presence in a directory marks a Python project
const PYTHON_MARKER_FILES: &[&str] = &[
    "requirements.txt",
    "setup.py",
    "setup.cfg",
    "pyproject.toml",
    "Pipfile",
    "environment.yml",
    "environment.yaml",
    "conda.yaml",
    ".python-version",
];

/// Directories whose presence marks a Python project
const PYTHON_MARKER_DIRS: &[&str] = &["__pycache__", ".venv", "venv"];

/// Immutable catalog of manager profiles
pub struct Registry {
    profiles: Vec<ManagerProfile>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Empty registry, for synthetic test setups
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registry pre-populated with all built-in managers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for profile in javascript::profiles() {
            registry.register(profile);
        }
        for profile in python::profiles() {
            registry.register(profile);
        }
        registry
    }

    /// Add a profile, indexed by name. A profile re-registered under an
    /// existing name replaces the old entry.
    pub fn register(&mut self, profile: ManagerProfile) {
        if let Some(&idx) = self.by_name.get(profile.name) {
            self.profiles[idx] = profile;
        } else {
            self.by_name.insert(profile.name, self.profiles.len());
            self.profiles.push(profile);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ManagerProfile> {
        self.by_name.get(name).map(|&idx| &self.profiles[idx])
    }

    /// Profiles of one ecosystem, in registration (priority) order
    pub fn by_ecosystem(&self, ecosystem: Ecosystem) -> impl Iterator<Item = &ManagerProfile> {
        self.profiles
            .iter()
            .filter(move |p| p.ecosystem == ecosystem)
    }

    /// All profiles in registration order
    pub fn all(&self) -> impl Iterator<Item = &ManagerProfile> {
        self.profiles.iter()
    }

    /// Detect the manager governing `dir` from its contents alone.
    ///
    /// Checks, most specific signal first: lockfiles, then manifest
    /// files, then auxiliary detect files. Pure filesystem reads;
    /// `None` on absence or ambiguity.
    pub fn detect_from_directory(&self, dir: &Path) -> Option<&ManagerProfile> {
        let ecosystem = Self::detect_ecosystem(dir)?;

        for profile in self.by_ecosystem(ecosystem) {
            if profile.find_lockfile(dir).is_some() {
                debug!("lockfile match for {} in {}", profile.name, dir.display());
                return Some(profile);
            }
        }

        for profile in self.by_ecosystem(ecosystem) {
            if dir.join(profile.manifest_file).is_file() {
                debug!("manifest match for {} in {}", profile.name, dir.display());
                return Some(profile);
            }
        }

        for profile in self.by_ecosystem(ecosystem) {
            for detect_file in profile.detect_files {
                if dir.join(detect_file).exists() {
                    debug!("detect-file match for {} in {}", profile.name, dir.display());
                    return Some(profile);
                }
            }
        }

        None
    }

    /// Infer the language ecosystem from a directory's contents
    pub fn detect_ecosystem(dir: &Path) -> Option<Ecosystem> {
        if dir.join("package.json").is_file() || dir.join("node_modules").is_dir() {
            return Some(Ecosystem::Javascript);
        }

        if PYTHON_MARKER_FILES.iter().any(|f| dir.join(f).is_file())
            || PYTHON_MARKER_DIRS.iter().any(|d| dir.join(d).is_dir())
        {
            return Some(Ecosystem::Python);
        }

        None
    }

    /// Nearest ancestor of `start` (inclusive) with ecosystem evidence
    pub fn find_project_root(&self, start: &Path) -> Option<PathBuf> {
        let mut dir = start;
        loop {
            if Self::detect_ecosystem(dir).is_some() {
                return Some(dir.to_path_buf());
            }
            dir = dir.parent()?;
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_register_all_managers() {
        let registry = Registry::with_defaults();
        for name in ["npm", "yarn", "pnpm", "bun", "pip", "pipenv", "poetry", "uv", "conda"] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
        assert!(registry.get("cargo").is_none());
    }

    #[test]
    fn ecosystem_order_follows_registration() {
        let registry = Registry::with_defaults();
        let js: Vec<_> = registry
            .by_ecosystem(Ecosystem::Javascript)
            .map(|p| p.name)
            .collect();
        assert_eq!(js, vec!["npm", "yarn", "pnpm", "bun"]);
    }

    #[test]
    fn lockfile_beats_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();

        let registry = Registry::with_defaults();
        let detected = registry.detect_from_directory(dir.path()).unwrap();
        assert_eq!(detected.name, "pnpm");
    }

    #[test]
    fn manifest_only_falls_back_to_first_registered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let registry = Registry::with_defaults();
        assert_eq!(registry.detect_from_directory(dir.path()).unwrap().name, "npm");
    }

    #[test]
    fn detect_file_match_for_pipenv() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Pipfile"), "").unwrap();

        let registry = Registry::with_defaults();
        assert_eq!(registry.detect_from_directory(dir.path()).unwrap().name, "pipenv");
    }

    #[test]
    fn detect_ecosystem_python_markers() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Registry::detect_ecosystem(dir.path()), None);

        fs::write(dir.path().join(".python-version"), "3.12").unwrap();
        assert_eq!(Registry::detect_ecosystem(dir.path()), Some(Ecosystem::Python));
    }

    #[test]
    fn detect_ecosystem_python_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".venv")).unwrap();
        assert_eq!(Registry::detect_ecosystem(dir.path()), Some(Ecosystem::Python));
    }

    #[test]
    fn javascript_wins_over_python_markers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("pyproject.toml"), "").unwrap();
        assert_eq!(
            Registry::detect_ecosystem(dir.path()),
            Some(Ecosystem::Javascript)
        );
    }

    #[test]
    fn find_project_root_ascends() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let registry = Registry::with_defaults();
        let root = registry.find_project_root(&nested).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn find_project_root_none_without_markers() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::with_defaults();
        assert!(registry.find_project_root(dir.path()).is_none());
    }

    #[test]
    fn detect_from_empty_directory() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::with_defaults();
        assert!(registry.detect_from_directory(dir.path()).is_none());
    }
}

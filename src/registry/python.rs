//! Python ecosystem manager profiles: pip, pipenv, poetry, uv, conda

use super::profile::{CommandTable, Ecosystem, ManagerProfile};

const PYPROJECT_TOML: &str = "pyproject.toml";
const DOT_VENV: &str = ".venv";

/// All Python profiles in registration order.
///
/// pip registering first is safe: directory detection runs the lockfile
/// pass over every profile before consulting manifests, so pip's
/// generic requirements.txt marker never shadows a discriminating
/// lockfile like poetry.lock or uv.lock.
pub(super) fn profiles() -> Vec<ManagerProfile> {
    vec![pip(), pipenv(), poetry(), uv(), conda()]
}

fn pip() -> ManagerProfile {
    ManagerProfile {
        name: "pip",
        ecosystem: Ecosystem::Python,
        manifest_file: "requirements.txt",
        lockfiles: &["requirements.lock", "requirements-lock.txt"],
        commands: CommandTable {
            install: "install -r requirements.txt",
            add: "install",
            install_dev: None,
            remove: "uninstall",
            update: "install --upgrade",
            list: Some("list"),
            outdated: Some("list --outdated"),
            run: None,
            exec: None,
            ci: None,
        },
        // Installs into the interpreter's site-packages, not the project
        install_dir: None,
        detect_files: &["requirements.txt", "setup.py"],
        supports_workspaces: false,
        workspace_marker_files: &[],
        dev_flag: None,
        global_flag: Some("--user"),
        builtin_verbs: &[],
        runner: None,
        overrides: None,
    }
}

fn pipenv() -> ManagerProfile {
    ManagerProfile {
        name: "pipenv",
        ecosystem: Ecosystem::Python,
        manifest_file: "Pipfile",
        lockfiles: &["Pipfile.lock"],
        commands: CommandTable {
            install: "install",
            add: "install",
            install_dev: Some("install --dev"),
            remove: "uninstall",
            update: "update",
            list: Some("graph"),
            outdated: Some("check"),
            run: Some("run"),
            exec: Some("run"),
            ci: Some("install --deploy"),
        },
        install_dir: Some(DOT_VENV),
        detect_files: &["Pipfile"],
        supports_workspaces: false,
        workspace_marker_files: &[],
        dev_flag: Some("--dev"),
        global_flag: None,
        builtin_verbs: &[],
        runner: None,
        overrides: None,
    }
}

fn poetry() -> ManagerProfile {
    ManagerProfile {
        name: "poetry",
        ecosystem: Ecosystem::Python,
        manifest_file: PYPROJECT_TOML,
        lockfiles: &["poetry.lock"],
        commands: CommandTable {
            install: "install",
            add: "add",
            install_dev: Some("add --dev"),
            remove: "remove",
            update: "update",
            list: Some("show"),
            outdated: Some("show --outdated"),
            run: Some("run"),
            exec: Some("run"),
            ci: Some("install --no-dev"),
        },
        install_dir: Some(DOT_VENV),
        detect_files: &[PYPROJECT_TOML],
        supports_workspaces: true,
        workspace_marker_files: &[],
        dev_flag: Some("--dev"),
        global_flag: None,
        builtin_verbs: &[],
        runner: None,
        overrides: None,
    }
}

fn uv() -> ManagerProfile {
    ManagerProfile {
        name: "uv",
        ecosystem: Ecosystem::Python,
        manifest_file: PYPROJECT_TOML,
        lockfiles: &["uv.lock"],
        commands: CommandTable {
            install: "sync",
            add: "add",
            install_dev: Some("add --dev"),
            remove: "remove",
            update: "lock --upgrade",
            list: Some("pip list"),
            outdated: Some("pip list --outdated"),
            run: Some("run"),
            exec: Some("run"),
            ci: Some("sync --frozen"),
        },
        install_dir: Some(DOT_VENV),
        detect_files: &[PYPROJECT_TOML, "uv.lock"],
        supports_workspaces: true,
        workspace_marker_files: &[],
        dev_flag: Some("--dev"),
        global_flag: None,
        builtin_verbs: &[],
        runner: Some(&["uvx"]),
        overrides: None,
    }
}

fn conda() -> ManagerProfile {
    ManagerProfile {
        name: "conda",
        ecosystem: Ecosystem::Python,
        manifest_file: "environment.yml",
        lockfiles: &["environment.lock.yml"],
        commands: CommandTable {
            install: "install",
            add: "install",
            install_dev: None,
            remove: "remove",
            update: "update",
            list: Some("list"),
            outdated: Some("search --outdated"),
            run: Some("run"),
            exec: Some("exec"),
            ci: None,
        },
        // Environments live under the conda prefix, not the project
        install_dir: None,
        detect_files: &["environment.yml", "environment.yaml", "conda.yaml"],
        supports_workspaces: false,
        workspace_marker_files: &[],
        dev_flag: None,
        global_flag: None,
        builtin_verbs: &[],
        runner: None,
        overrides: None,
    }
}

//! JavaScript ecosystem manager profiles: npm, yarn, pnpm, bun

use super::profile::{CommandTable, Ecosystem, ManagerProfile};
use crate::config::schema::ScriptMode;
use crate::mapper::{MapContext, MappedCommand};
use crate::verbs;

const PACKAGE_JSON: &str = "package.json";
const NODE_MODULES: &str = "node_modules";

/// All JavaScript profiles in detection priority order
pub(super) fn profiles() -> Vec<ManagerProfile> {
    vec![npm(), yarn(), pnpm(), bun()]
}

fn npm() -> ManagerProfile {
    ManagerProfile {
        name: "npm",
        ecosystem: Ecosystem::Javascript,
        manifest_file: PACKAGE_JSON,
        lockfiles: &["package-lock.json", "npm-shrinkwrap.json"],
        commands: CommandTable {
            install: "install",
            add: "install",
            install_dev: Some("install --save-dev"),
            remove: "uninstall",
            update: "update",
            list: Some("list"),
            outdated: Some("outdated"),
            run: Some("run"),
            exec: Some("exec"),
            ci: Some("ci"),
        },
        install_dir: Some(NODE_MODULES),
        detect_files: &[],
        supports_workspaces: true,
        workspace_marker_files: &[],
        dev_flag: Some("--save-dev"),
        global_flag: Some("-g"),
        builtin_verbs: verbs::NPM_BUILTINS,
        runner: Some(&["npx"]),
        overrides: None,
    }
}

fn yarn() -> ManagerProfile {
    ManagerProfile {
        name: "yarn",
        ecosystem: Ecosystem::Javascript,
        manifest_file: PACKAGE_JSON,
        lockfiles: &["yarn.lock"],
        commands: CommandTable {
            install: "install",
            add: "add",
            install_dev: Some("add --dev"),
            remove: "remove",
            update: "upgrade",
            list: Some("list"),
            outdated: Some("outdated"),
            run: Some("run"),
            exec: Some("exec"),
            ci: Some("install --frozen-lockfile"),
        },
        install_dir: Some(NODE_MODULES),
        detect_files: &[],
        supports_workspaces: true,
        workspace_marker_files: &[],
        dev_flag: Some("--dev"),
        global_flag: Some("global"),
        builtin_verbs: &[],
        runner: Some(&["yarn", "dlx"]),
        overrides: None,
    }
}

fn pnpm() -> ManagerProfile {
    ManagerProfile {
        name: "pnpm",
        ecosystem: Ecosystem::Javascript,
        manifest_file: PACKAGE_JSON,
        lockfiles: &["pnpm-lock.yaml"],
        commands: CommandTable {
            install: "install",
            add: "add",
            install_dev: Some("add --save-dev"),
            remove: "remove",
            update: "update",
            list: Some("list"),
            outdated: Some("outdated"),
            run: Some("run"),
            exec: Some("exec"),
            ci: Some("install --frozen-lockfile"),
        },
        install_dir: Some(NODE_MODULES),
        detect_files: &[],
        supports_workspaces: true,
        workspace_marker_files: &["pnpm-workspace.yaml", "pnpm-workspace.yml"],
        dev_flag: Some("--save-dev"),
        global_flag: Some("-g"),
        builtin_verbs: &[],
        runner: Some(&["pnpm", "dlx"]),
        overrides: None,
    }
}

fn bun() -> ManagerProfile {
    ManagerProfile {
        name: "bun",
        ecosystem: Ecosystem::Javascript,
        manifest_file: PACKAGE_JSON,
        lockfiles: &["bun.lock", "bun.lockb"],
        commands: CommandTable {
            install: "install",
            add: "add",
            install_dev: Some("add -d"),
            remove: "remove",
            update: "update",
            list: Some("pm ls"),
            outdated: Some("outdated"),
            run: Some("run"),
            exec: Some("run"),
            ci: Some("install --frozen-lockfile"),
        },
        install_dir: Some(NODE_MODULES),
        detect_files: &[],
        supports_workspaces: true,
        workspace_marker_files: &[],
        dev_flag: Some("-d"),
        global_flag: Some("-g"),
        builtin_verbs: &[],
        runner: Some(&["bunx"]),
        overrides: Some(bun_overrides),
    }
}

/// Bun overlaps its built-ins with common script names, so script
/// resolution is configurable. `exec` also has no separate verb.
fn bun_overrides(verb: &str, args: Vec<String>, ctx: &MapContext) -> Option<MappedCommand> {
    match verb {
        "exec" => Some(MappedCommand {
            command: "run".to_string(),
            args,
        }),
        _ if ctx.has_script && !verbs::is_canonical(verb) => match ctx.script_mode {
            // Builtin mode short-circuits the generic script wrap
            ScriptMode::Builtin => Some(MappedCommand {
                command: verb.to_string(),
                args,
            }),
            ScriptMode::Auto | ScriptMode::Script => None,
        },
        _ => None,
    }
}

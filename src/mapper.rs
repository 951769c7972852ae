//! Command normalization and mapping
//!
//! Folds user verbs to canonical abstract verbs, translates dev flags,
//! consults per-manager overrides, and falls back to the profile's
//! command table. Unknown verbs that name a manifest script are wrapped
//! in the manager's run command.

use crate::config::schema::ScriptMode;
use crate::manifest;
use crate::registry::ManagerProfile;
use crate::verbs;
use std::path::Path;

/// A manager-specific invocation, ready to hand to the execution shim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedCommand {
    pub command: String,
    pub args: Vec<String>,
}

impl MappedCommand {
    /// Build from a command-table entry, splitting embedded flags.
    ///
    /// `"install --save-dev"` + `["eslint"]` becomes command `install`
    /// with args `["--save-dev", "eslint"]`.
    pub fn from_table(entry: &str, args: impl IntoIterator<Item = String>) -> Self {
        let mut parts = entry.split_whitespace();
        let command = parts.next().unwrap_or_default().to_string();
        let mut full_args: Vec<String> = parts.map(str::to_string).collect();
        full_args.extend(args);
        Self {
            command,
            args: full_args,
        }
    }

    /// Full argument vector: concrete verb followed by its args
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.command.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Context consulted by per-manager override hooks
#[derive(Debug, Clone, Copy)]
pub struct MapContext {
    /// A dev flag was present (only set for the `install` verb)
    pub dev: bool,
    /// The raw verb names a script in the project manifest
    pub has_script: bool,
    pub script_mode: ScriptMode,
}

/// Map a user verb + args to the manager-specific invocation.
///
/// `project_root` enables script lookups; pass `None` when no project
/// is in play (global operations).
pub fn map_command(
    verb: &str,
    args: &[String],
    manager: &ManagerProfile,
    project_root: Option<&Path>,
    script_mode: ScriptMode,
) -> MappedCommand {
    let normalized = verbs::normalize(verb);

    // Dev flags mean something only on install; everywhere else the
    // tokens pass through untouched.
    let (dev, filtered): (bool, Vec<String>) = if normalized == "install" {
        let dev = args.iter().any(|a| verbs::DEV_FLAGS.contains(&a.as_str()));
        let filtered = args
            .iter()
            .filter(|a| !verbs::DEV_FLAGS.contains(&a.as_str()))
            .cloned()
            .collect();
        (dev, filtered)
    } else {
        (false, args.to_vec())
    };

    let has_script = project_root
        .map(|root| manifest::has_script(verb, root, manager))
        .unwrap_or(false);

    let ctx = MapContext {
        dev,
        has_script,
        script_mode,
    };

    if let Some(overrides) = manager.overrides {
        if let Some(mapped) = overrides(normalized, filtered.clone(), &ctx) {
            return mapped;
        }
    }

    map_generic(normalized, filtered, manager, &ctx)
}

fn map_generic(
    verb: &str,
    args: Vec<String>,
    manager: &ManagerProfile,
    ctx: &MapContext,
) -> MappedCommand {
    let table = &manager.commands;

    match verb {
        // A bare install is always the full dependency install, never
        // an add of zero packages. A dev flag with no package names has
        // nothing to scope to and folds into the same full install.
        "install" if args.is_empty() => MappedCommand::from_table(table.install, args),
        "install" => {
            if ctx.dev {
                match table.install_dev {
                    Some(entry) => MappedCommand::from_table(entry, args),
                    None => match manager.dev_flag {
                        Some(flag) => {
                            let mut with_flag = vec![flag.to_string()];
                            with_flag.extend(args);
                            MappedCommand::from_table(table.add, with_flag)
                        }
                        // Manager has no dev-dependency concept; drop the flag.
                        None => MappedCommand::from_table(table.add, args),
                    },
                }
            } else {
                MappedCommand::from_table(table.add, args)
            }
        }
        "uninstall" => MappedCommand::from_table(table.remove, args),
        "update" => MappedCommand::from_table(table.update, args),
        "list" | "ls" => match table.list {
            Some(entry) => MappedCommand::from_table(entry, args),
            None => passthrough(verb, args),
        },
        "outdated" => match table.outdated {
            Some(entry) => MappedCommand::from_table(entry, args),
            None => passthrough(verb, args),
        },
        _ => {
            // Script passthrough: an unknown verb naming a manifest
            // script defers to the script, unless the manager claims
            // the verb as a built-in.
            if ctx.has_script && !manager.builtin_verbs.contains(&verb) {
                if let Some(run) = table.run {
                    let mut script_args = vec![verb.to_string()];
                    script_args.extend(args);
                    return MappedCommand::from_table(run, script_args);
                }
            }
            passthrough(verb, args)
        }
    }
}

fn passthrough(verb: &str, args: Vec<String>) -> MappedCommand {
    MappedCommand {
        command: verb.to_string(),
        args,
    }
}

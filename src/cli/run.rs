//! Top-level invocation flow
//!
//! detect → auto-sync → map → route → execute, all sequential within
//! one process lifetime. Returns the exit code the process should
//! mirror.

use crate::cli::args::Cli;
use crate::cli::set_config;
use crate::config::{self, ConfigManager, UserConfig};
use crate::detect;
use crate::error::{PmError, PmResult};
use crate::exec;
use crate::mapper;
use crate::registry::{ManagerProfile, Registry};
use crate::sync::{self, SyncOptions};
use crate::verbs;
use console::style;
use std::env;
use std::path::Path;
use tracing::debug;

/// Flags the user may place after the verb, npm-style
struct InlineFlags {
    dry_run: bool,
    global: bool,
}

/// Execute one omnipm invocation
pub async fn execute(cli: Cli) -> PmResult<i32> {
    let registry = Registry::with_defaults();
    let user_config = ConfigManager::new().load().await;

    let (command, inline) = strip_inline_flags(cli.command);
    let dry_run = cli.dry_run || inline.dry_run;
    let global = cli.global || inline.global;

    if command.first().map(String::as_str) == Some("set-config") {
        set_config::execute(&command[1..], &registry).await?;
        return Ok(0);
    }

    if global {
        return run_global(&command, &registry, &user_config, dry_run).await;
    }

    let cwd = env::current_dir().map_err(|e| PmError::io("getting current directory", e))?;
    let detection = detect::detect(&cwd, &registry, &user_config)?;
    debug!(
        "manager={} project_root={} workspace={}",
        detection.manager.name,
        detection.project_root.display(),
        detection.is_workspace
    );

    // No verb at all means "bring the dependency set up to date"
    let Some((verb, args)) = command.split_first() else {
        sync::synchronize(SyncOptions {
            manager: detection.manager,
            project_root: &detection.project_root,
            workspace_root: detection.workspace_root.as_deref(),
            dry_run,
            ci_mode: false,
            force: true,
        })
        .await?;
        return Ok(0);
    };

    // Scripts and read-only verbs rely on an up-to-date install;
    // install-like verbs manage the dependency set themselves.
    if !verbs::skips_auto_sync(verb) {
        sync::synchronize(SyncOptions {
            manager: detection.manager,
            project_root: &detection.project_root,
            workspace_root: detection.workspace_root.as_deref(),
            dry_run,
            ci_mode: false,
            force: false,
        })
        .await?;
    }

    let run_at_root = detection.is_workspace && verbs::runs_at_workspace_root(verb, args);
    let execution_dir: &Path = if run_at_root {
        detection.check_root()
    } else if detection.manager.name == "npm" {
        // npm resolves relative to its own cwd, not the invocation dir
        &detection.project_root
    } else {
        &cwd
    };

    let mapped = mapper::map_command(
        verb,
        args,
        detection.manager,
        Some(&detection.project_root),
        user_config.script_mode,
    );
    let argv = mapped.argv();

    if dry_run {
        println!(
            "[dry-run] Would execute: {} {} (in {})",
            detection.manager.name,
            argv.join(" "),
            execution_dir.display()
        );
        return Ok(0);
    }

    if run_at_root {
        println!(
            "{} {}",
            style("Running at workspace root:").dim(),
            execution_dir.display()
        );
    }

    exec::run_command(detection.manager.name, &argv, execution_dir).await
}

/// `-g`/`--global` skips project detection entirely: the command is
/// mapped against the configured global manager and runs in the cwd
/// with that manager's global-flag spelling applied.
async fn run_global(
    command: &[String],
    registry: &Registry,
    user_config: &UserConfig,
    dry_run: bool,
) -> PmResult<i32> {
    let Some((verb, args)) = command.split_first() else {
        return Err(PmError::User(
            "A command is required with --global".to_string(),
        ));
    };

    let manager = config::global_manager(user_config, registry);
    let mapped = mapper::map_command(verb, args, manager, None, user_config.script_mode);
    let argv = apply_global_flag(mapped.argv(), manager);

    let cwd = env::current_dir().map_err(|e| PmError::io("getting current directory", e))?;
    if dry_run {
        println!(
            "[dry-run] Would execute: {} {} (in {})",
            manager.name,
            argv.join(" "),
            cwd.display()
        );
        return Ok(0);
    }

    exec::run_command(manager.name, &argv, &cwd).await
}

/// Yarn spells "global" as a verb prefix; everyone else uses a flag
fn apply_global_flag(mut argv: Vec<String>, manager: &ManagerProfile) -> Vec<String> {
    match manager.global_flag {
        Some(flag) if flag.starts_with('-') => argv.push(flag.to_string()),
        Some(prefix) => argv.insert(0, prefix.to_string()),
        None => {}
    }
    argv
}

fn strip_inline_flags(command: Vec<String>) -> (Vec<String>, InlineFlags) {
    let mut flags = InlineFlags {
        dry_run: false,
        global: false,
    };
    let command = command
        .into_iter()
        .filter(|arg| match arg.as_str() {
            "--dry-run" => {
                flags.dry_run = true;
                false
            }
            "-g" | "--global" => {
                flags.global = true;
                false
            }
            _ => true,
        })
        .collect();
    (command, flags)
}

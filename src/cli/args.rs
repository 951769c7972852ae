//! CLI argument definitions using clap derive
//!
//! The verb surface is free-form (any manager verb or script name), so
//! everything from the first positional onward is captured verbatim and
//! interpreted by the dispatch layer.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Commands:
  install/i/add [pkg]       Install dependencies or add package(s)
  uninstall/rm/remove <pkg> Remove package(s)
  update/up/upgrade [pkg]   Update packages
  <script> [args]           Run a manifest script
  set-config <key> <name>   Set default-package-manager,
                            global-package-manager, or script-mode

Detects: npm / yarn / pnpm / bun / pip / pipenv / poetry / uv / conda";

/// omnipm - universal front-end for package manager CLIs
///
/// Detects the package manager governing the current project and
/// translates generic verbs into its specific invocation.
#[derive(Parser, Debug)]
#[command(name = "omnipm")]
#[command(author, about, long_about = None, after_help = AFTER_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print the resolved command and directory instead of executing
    #[arg(long)]
    pub dry_run: bool,

    /// Route to the configured global package manager
    #[arg(short = 'g', long = "global")]
    pub global: bool,

    /// Increase log verbosity (--verbose info, --verbose --verbose debug)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Verb and arguments, passed through to the detected manager
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

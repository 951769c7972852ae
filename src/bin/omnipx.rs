//! omnipx - universal package runner front-end
//!
//! Detects the project's package manager and forwards everything to its
//! package runner: npm → npx, yarn → yarn dlx, pnpm → pnpm dlx,
//! bun → bunx, uv → uvx.

use clap::Parser;
use console::style;
use omnipm::config::ConfigManager;
use omnipm::error::{PmError, PmResult};
use omnipm::registry::Registry;
use omnipm::{detect, exec};
use std::process::ExitCode;

/// omnipx - run a package binary with the project's package runner
#[derive(Parser, Debug)]
#[command(name = "omnipx")]
#[command(author, version, long_about = None)]
#[command(after_help = "Examples:\n  omnipx create-react-app my-app\n  omnipx prettier --write .")]
struct Cli {
    /// Print the resolved command instead of executing
    #[arg(long)]
    dry_run: bool,

    /// Package binary and arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PmResult<i32> {
    let registry = Registry::with_defaults();
    let user_config = ConfigManager::new().load().await;

    let cwd = std::env::current_dir().map_err(|e| PmError::io("getting current directory", e))?;
    let detection = detect::detect(&cwd, &registry, &user_config)?;

    let Some(runner) = detection.manager.runner else {
        return Err(PmError::User(format!(
            "{} has no package runner",
            detection.manager.name
        )));
    };

    let program = runner[0];
    let mut args: Vec<String> = runner[1..].iter().map(|s| s.to_string()).collect();
    args.extend(cli.command);

    if cli.dry_run {
        println!(
            "[dry-run] Would execute: {} {} (in {})",
            program,
            args.join(" "),
            cwd.display()
        );
        return Ok(0);
    }

    exec::run_command(program, &args, &cwd).await
}

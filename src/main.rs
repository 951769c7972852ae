//! omnipm - universal package manager front-end
//!
//! CLI entry point: parses flags, initializes logging, and mirrors the
//! wrapped command's exit code.

use clap::Parser;
use console::style;
use omnipm::cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("omnipm=warn"),
        1 => EnvFilter::new("omnipm=info"),
        _ => EnvFilter::new("omnipm=debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    if cli.version {
        println!("omnipm {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match omnipm::cli::run::execute(cli).await {
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

//! External command execution shim
//!
//! The single suspension point of the process: spawn the manager binary
//! with inherited stdio, await it, and surface its exit code so the
//! wrapper behaves exactly like a direct invocation.

use crate::error::{PmError, PmResult};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Run `program args...` in `cwd`, streaming its output, and return the
/// child's exit code.
///
/// Spawn failures (binary missing, not on PATH) are errors; a nonzero
/// child exit is not, the caller mirrors it.
pub async fn run_command(program: &str, args: &[String], cwd: &Path) -> PmResult<i32> {
    debug!("executing: {} {} (in {})", program, args.join(" "), cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .map_err(|e| PmError::spawn(format!("{} {}", program, args.join(" ")), e))?;

    match status.code() {
        Some(code) => Ok(code),
        None => Err(PmError::Interrupted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn exit_code_propagates() {
        let dir = TempDir::new().unwrap();
        let code = run_command("sh", &["-c".to_string(), "exit 7".to_string()], dir.path())
            .await
            .unwrap();
        assert_eq!(code, 7);
    }

    #[tokio::test]
    async fn runs_in_requested_directory() {
        let dir = TempDir::new().unwrap();
        let marker = "omnipm-exec-test".to_string();
        let code = run_command(
            "sh",
            &["-c".to_string(), format!("touch {marker}")],
            dir.path(),
        )
        .await
        .unwrap();
        assert_eq!(code, 0);
        assert!(dir.path().join("omnipm-exec-test").is_file());
    }

    #[tokio::test]
    async fn missing_binary_is_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let err = run_command("definitely-not-a-real-binary", &[], dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, PmError::SpawnFailure { .. }));
    }
}

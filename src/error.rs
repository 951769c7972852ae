//! Error types for omnipm
//!
//! All modules use `PmResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for omnipm operations
pub type PmResult<T> = Result<T, PmError>;

/// All errors that can occur in omnipm
#[derive(Error, Debug)]
pub enum PmError {
    // Detection errors
    #[error("No project root found from {0}. Not inside a recognized project directory.")]
    ProjectNotFound(PathBuf),

    // Configuration errors
    #[error("Unknown package manager: {0}")]
    UnknownManager(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Failed to execute {command}: {source}")]
    SpawnFailure {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Child process terminated by signal")]
    Interrupted,

    #[error("Failed to install dependencies: {manager} exited with code {code}")]
    SyncFailed { manager: String, code: i32 },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl PmError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a spawn failure error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailure {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ProjectNotFound(_) => Some(
                "Run inside a directory containing a manifest such as package.json or pyproject.toml",
            ),
            Self::UnknownManager(_) => {
                Some("Valid names: npm, yarn, pnpm, bun, pip, pipenv, poetry, uv, conda")
            }
            Self::UnknownConfigKey(_) => {
                Some("Valid keys: default-package-manager, global-package-manager, script-mode")
            }
            Self::SpawnFailure { .. } => {
                Some("Check that the package manager binary is installed and on PATH")
            }
            _ => None,
        }
    }
}

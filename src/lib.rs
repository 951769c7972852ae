//! omnipm - Universal front-end for package manager CLIs
//!
//! Detects which package manager governs the current project, decides
//! where a command should execute (project root vs. workspace root),
//! translates generic verbs and flags into that manager's invocation,
//! and keeps the installed dependency set in sync with the lockfile.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod exec;
pub mod manifest;
pub mod mapper;
pub mod registry;
pub mod sync;
pub mod verbs;

pub use error::{PmError, PmResult};

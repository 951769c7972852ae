//! CLI surface: argument definitions and the invocation flow

pub mod args;
pub mod run;
pub mod set_config;

pub use args::Cli;

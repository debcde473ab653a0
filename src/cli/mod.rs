//! Interactive and scripted shell over the reporting engine.

pub mod commands;
pub mod context;
pub mod formatters;
pub mod output;
mod shell;
pub mod table;

pub use context::{CliMode, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};

//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! stripbot binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{print_comic, run_bot};

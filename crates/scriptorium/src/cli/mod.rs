//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptorium binary.

mod commands;
mod generate;
mod info;

pub use commands::{Cli, Commands};
pub use generate::{GenerateOptions, run_generate};
pub use info::{check_credential, list_tones};

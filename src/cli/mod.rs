//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    describe_options, handle_config_action, init_config, list_functions, load_config,
    resolve_options, run, RunError,
};
pub use enums::Function;

//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod document;
mod logging;
mod version;

pub use commands::{
    handle_config_command, handle_get, handle_kinds, handle_match, handle_set, ConfigSubcommand,
    SetArgs,
};
pub use logging::init_logging;
pub use version::display_version;

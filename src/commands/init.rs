//! Handler for the `init` command.

use colored::*;
use std::path::Path;

use fencefmt_lib::config::{self as fencefmt_config, ConfigError};
use fencefmt_lib::exit_codes::exit;

/// Handle the init command: write a commented default config file.
pub fn handle_init(path: &Path) {
    match fencefmt_config::create_default_config(path) {
        Ok(()) => {
            println!("{} {}", "Created configuration file:".green().bold(), path.display());
        }
        Err(ConfigError::FileExists { path }) => {
            eprintln!(
                "{} {} ({})",
                "Configuration file already exists at".yellow().bold(),
                path.display(),
                "not overwritten".dimmed()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

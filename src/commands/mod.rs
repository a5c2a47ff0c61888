//! Command handlers for the fencefmt CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod fmt;
pub mod init;
pub mod languages;

use colored::*;
use fencefmt_lib::config::Settings;
use fencefmt_lib::exit_codes::exit;
use std::path::Path;

/// Load settings for a command, exiting with a tool error if the config is unusable.
pub fn load_settings(config_path: Option<&Path>, no_config: bool) -> Settings {
    let start_dir = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());

    match Settings::resolve(config_path, &start_dir, no_config) {
        Ok((settings, source)) => {
            if let Some(path) = source {
                log::info!("Loaded config from {}", path.display());
            }
            settings
        }
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}

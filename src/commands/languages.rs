//! Handler for the `languages` command.

use colored::*;
use fencefmt_lib::code_block_tools::LanguageResolver;
use fencefmt_lib::config::Settings;

/// Handle the languages command: list recognized fence tags.
pub fn handle_languages(settings: &Settings) {
    println!("{:<12} {:<12} {:<12} STATUS", "TAG", "FORMATTER", "FAMILY");

    for (tag, entry) in LanguageResolver::entries() {
        let status = if settings.languages.is_enabled(entry.family) {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };
        println!(
            "{:<12} {:<12} {:<12} {}",
            tag,
            entry.formatter.as_str(),
            entry.family.as_str(),
            status
        );
    }
}

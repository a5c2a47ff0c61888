//! Handler for the `fmt` command.

use anyhow::Context;
use colored::*;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use crate::cli_types::FmtArgs;
use fencefmt_lib::config::Settings;
use fencefmt_lib::exit_codes::exit;

/// Handle the fmt command: format the code blocks of one document.
pub fn handle_fmt(args: &FmtArgs, mut settings: Settings) {
    args.apply_to(&mut settings);

    let path = args.path();
    let display_name = path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

    let content = match read_document(path) {
        Ok(Some(content)) => content,
        Ok(None) => exit::success(),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let rewrite = fencefmt_lib::format_markdown(&content, &settings);
    let stats = rewrite.stats;
    log::info!(
        "{display_name}: {} blocks, {} reformatted, {} unchanged, {} unsupported, {} disabled, {} failed",
        stats.blocks,
        stats.formatted,
        stats.unchanged,
        stats.unsupported,
        stats.disabled,
        stats.failed
    );

    if args.check {
        if rewrite.changed() {
            if !args.quiet {
                eprintln!("{} {}", "Would reformat code blocks in".yellow().bold(), display_name);
            }
            exit::would_reformat();
        }
        exit::success();
    }

    let result = match path {
        Some(path) if !args.stdout => {
            if rewrite.changed() {
                write_document(path, &rewrite.content)
            } else {
                Ok(())
            }
        }
        _ => print_document(&rewrite.content),
    };
    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        exit::tool_error();
    }

    if !args.quiet {
        eprintln!("{} {}", "Formatted code blocks in".green().bold(), display_name);
    }
}

/// Read the document to format.
///
/// `Ok(None)` means there is nothing to work on: stdin is an interactive
/// terminal, or the input is not UTF-8 text.
fn read_document(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    let bytes = match path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                log::debug!("No document given and stdin is a terminal; nothing to format");
                return Ok(None);
            }
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(_) => {
            log::debug!("Input is not UTF-8 text; nothing to format");
            Ok(None)
        }
    }
}

fn write_document(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn print_document(content: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}

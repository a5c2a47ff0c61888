use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli_types;
mod commands;

use cli_types::FmtArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore configuration files and use the defaults
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format the fenced code blocks of a Markdown document
    Fmt(FmtArgs),
    /// Create a default configuration file
    Init {
        /// Where to write the file
        #[arg(default_value = ".fencefmt.toml")]
        path: PathBuf,
    },
    /// List recognized fence tags and their formatters
    Languages,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Fmt(args) => {
            let settings = commands::load_settings(cli.config.as_deref(), cli.no_config);
            commands::fmt::handle_fmt(args, settings);
        }
        Commands::Init { path } => commands::init::handle_init(path),
        Commands::Languages => {
            let settings = commands::load_settings(cli.config.as_deref(), cli.no_config);
            commands::languages::handle_languages(&settings);
        }
    }
}

pub mod code_block_tools;
pub mod config;
pub mod exit_codes;
pub mod types;

pub use code_block_tools::{Dispatcher, FormattingEngine, Rewrite, RewriteStats, process_markdown};
pub use config::Settings;

/// Format every fenced code block in `content` using `settings`.
///
/// Builds the engine the settings select. Callers formatting many documents
/// should build the engine once and use [`process_markdown`] directly.
pub fn format_markdown<'a>(content: &'a str, settings: &Settings) -> Rewrite<'a> {
    let engine = code_block_tools::build_engine(settings.engine, &settings.prettier_command, settings.timeout);
    let dispatcher = Dispatcher::new(
        engine.as_ref(),
        settings.formatting_options(),
        settings.languages,
        settings.tag_matching,
    );
    process_markdown(content, &dispatcher)
}

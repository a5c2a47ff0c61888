use clap::Args;
use fencefmt_lib::code_block_tools::{EngineKind, LanguageFamily, TagMatching};
use fencefmt_lib::config::Settings;
use fencefmt_lib::types::{IndentSize, PrintWidth};
use std::path::{Path, PathBuf};

type ParseError = Box<dyn std::error::Error + Send + Sync>;

fn parse_indent_size(value: &str) -> Result<IndentSize, ParseError> {
    Ok(IndentSize::new(value.parse()?)?)
}

fn parse_print_width(value: &str) -> Result<PrintWidth, ParseError> {
    Ok(PrintWidth::new(value.parse()?)?)
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Markdown file to format in place (omit or use '-' for stdin)
    pub file: Option<PathBuf>,

    /// Exit with code 1 if any code block would be reformatted, without writing
    #[arg(long)]
    pub check: bool,

    /// Print the formatted document instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    /// Width of one indentation level (1-8)
    #[arg(long, value_parser = parse_indent_size)]
    pub indent_size: Option<IndentSize>,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub use_tabs: bool,

    /// Line width the formatter wraps at (40-120)
    #[arg(long, value_parser = parse_print_width)]
    pub print_width: Option<PrintWidth>,

    /// Formatting engine to use
    #[arg(long, value_enum)]
    pub engine: Option<EngineKind>,

    /// Leave blocks of this language family unformatted (repeatable)
    #[arg(long, value_enum)]
    pub disable: Vec<LanguageFamily>,

    /// Match fence tags case-insensitively (```JSON formats like ```json)
    #[arg(long)]
    pub ignore_case: bool,

    /// Don't print the completion message
    #[arg(short, long)]
    pub quiet: bool,
}

impl FmtArgs {
    /// Path of the document, or `None` when reading stdin.
    pub fn path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Layer command-line overrides on top of the loaded settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(indent_size) = self.indent_size {
            settings.indent_size = indent_size;
        }
        if self.use_tabs {
            settings.indent_with_tabs = true;
        }
        if let Some(print_width) = self.print_width {
            settings.print_width = print_width;
        }
        if let Some(engine) = self.engine {
            settings.engine = engine;
        }
        for family in &self.disable {
            settings.languages.set(*family, false);
        }
        if self.ignore_case {
            settings.tag_matching = TagMatching::CaseInsensitive;
        }
    }
}

//!
//! Settings for fencefmt: formatter layout options, engine selection and the
//! per-language switches, loaded from a TOML file.

use crate::code_block_tools::engine::{EngineKind, FormattingOptions};
use crate::code_block_tools::language::{LanguageFamily, TagMatching};
use crate::code_block_tools::prettier::DEFAULT_COMMAND;
use crate::types::{IndentSize, PrintWidth};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File names searched for, in order, in each directory during discovery.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".fencefmt.toml", "fencefmt.toml"];

/// Default per-block timeout for external formatters, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Errors that can occur when loading or creating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {path}: {source}")]
    Io { source: io::Error, path: PathBuf },

    /// The file is not valid TOML or holds invalid values
    #[error("Failed to parse config file at {path}: {source}")]
    Parse { source: Box<toml::de::Error>, path: PathBuf },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: PathBuf },
}

/// Per-family enable flags. Every family is enabled unless switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageToggles {
    pub javascript: bool,
    pub typescript: bool,
    pub json: bool,
    pub html: bool,
    pub css: bool,
    pub markdown: bool,
    pub yaml: bool,
}

impl LanguageToggles {
    pub fn is_enabled(&self, family: LanguageFamily) -> bool {
        match family {
            LanguageFamily::Javascript => self.javascript,
            LanguageFamily::Typescript => self.typescript,
            LanguageFamily::Json => self.json,
            LanguageFamily::Html => self.html,
            LanguageFamily::Css => self.css,
            LanguageFamily::Markdown => self.markdown,
            LanguageFamily::Yaml => self.yaml,
        }
    }

    pub fn set(&mut self, family: LanguageFamily, enabled: bool) {
        let flag = match family {
            LanguageFamily::Javascript => &mut self.javascript,
            LanguageFamily::Typescript => &mut self.typescript,
            LanguageFamily::Json => &mut self.json,
            LanguageFamily::Html => &mut self.html,
            LanguageFamily::Css => &mut self.css,
            LanguageFamily::Markdown => &mut self.markdown,
            LanguageFamily::Yaml => &mut self.yaml,
        };
        *flag = enabled;
    }
}

impl Default for LanguageToggles {
    fn default() -> Self {
        Self {
            javascript: true,
            typescript: true,
            json: true,
            html: true,
            css: true,
            markdown: true,
            yaml: true,
        }
    }
}

/// Everything a formatting run reads from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub indent_size: IndentSize,
    pub indent_with_tabs: bool,
    pub print_width: PrintWidth,
    pub tag_matching: TagMatching,
    pub engine: EngineKind,
    /// Milliseconds per external formatter call; 0 disables the limit
    pub timeout: u64,
    pub prettier_command: Vec<String>,
    pub languages: LanguageToggles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_size: IndentSize::default(),
            indent_with_tabs: false,
            print_width: PrintWidth::default(),
            tag_matching: TagMatching::default(),
            engine: EngineKind::default(),
            timeout: DEFAULT_TIMEOUT_MS,
            prettier_command: vec![DEFAULT_COMMAND.to_string()],
            languages: LanguageToggles::default(),
        }
    }
}

impl Settings {
    /// The layout options handed to the formatter for every block.
    pub fn formatting_options(&self) -> FormattingOptions {
        FormattingOptions {
            indent_size: self.indent_size,
            indent_with_tabs: self.indent_with_tabs,
            print_width: self.print_width,
        }
    }

    /// Parse settings from TOML text. `path` is only used in errors.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            source: Box::new(e),
            path: path.to_path_buf(),
        })
    }

    /// Load settings from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolve the settings for a run.
    ///
    /// An explicit path always wins. Otherwise, unless `skip_discovery` is set,
    /// `start_dir` and its ancestors are searched for a config file. Returns the
    /// settings together with the file they came from, if any.
    pub fn resolve(
        explicit: Option<&Path>,
        start_dir: &Path,
        skip_discovery: bool,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        if skip_discovery {
            return Ok((Self::default(), None));
        }
        match discover_config(start_dir) {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Ok((Self::load(&path)?, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }
}

/// Find the nearest config file at or above `start_dir`.
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Commented configuration written by `fencefmt init`. Parses to the defaults.
pub const DEFAULT_CONFIG: &str = r#"# fencefmt configuration file

# Width of one indentation level (1-8)
indent-size = 2

# Indent with tabs instead of spaces
indent-with-tabs = false

# Line width the formatter tries to wrap at (40-120)
print-width = 80

# How fence tags are matched: "exact" (```json but not ```JSON) or "case-insensitive"
tag-matching = "exact"

# Formatting engine: "auto" (built-in JSON, prettier for the rest), "prettier" or "builtin"
engine = "auto"

# Milliseconds allowed per external formatter call (0 = no limit)
timeout = 30000

# Command used to run prettier, e.g. ["npx", "prettier"]
prettier-command = ["prettier"]

# Switch formatting off for individual language families
[languages]
javascript = true
typescript = true
json = true
html = true
css = true
markdown = true
yaml = true
"#;

/// Write [`DEFAULT_CONFIG`] to `path`, refusing to overwrite an existing file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })
}

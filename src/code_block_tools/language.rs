//! Language tag resolution.
//!
//! Maps the tag written after an opening fence (e.g. `ts`, `yml`) to the
//! formatter grammar that should handle the block, and to the language family
//! whose enable flag governs it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Grammar identifier passed to the formatting engine (prettier's `--parser`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterId {
    Babel,
    Typescript,
    Json,
    Css,
    Scss,
    Less,
    Html,
    Vue,
    Markdown,
    Yaml,
}

impl FormatterId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::Typescript => "typescript",
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Html => "html",
            Self::Vue => "vue",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for FormatterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group of tags sharing one enable/disable switch in the settings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageFamily {
    Javascript,
    Typescript,
    Json,
    Html,
    Css,
    Markdown,
    Yaml,
}

impl LanguageFamily {
    pub const ALL: [Self; 7] = [
        Self::Javascript,
        Self::Typescript,
        Self::Json,
        Self::Html,
        Self::Css,
        Self::Markdown,
        Self::Yaml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for LanguageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How fence tags are compared against the alias table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagMatching {
    /// Tags must be written exactly as in the table (`json`, not `JSON`)
    #[default]
    Exact,
    /// Tags are lower-cased before lookup
    CaseInsensitive,
}

/// One row of the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub formatter: FormatterId,
    pub family: LanguageFamily,
}

/// Resolver for fence tags.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver {
    matching: TagMatching,
    table: &'static HashMap<&'static str, LanguageEntry>,
}

impl LanguageResolver {
    pub fn new(matching: TagMatching) -> Self {
        Self {
            matching,
            table: &LANGUAGE_TABLE,
        }
    }

    fn lookup(&self, tag: &str) -> Option<LanguageEntry> {
        match self.matching {
            TagMatching::Exact => self.table.get(tag).copied(),
            TagMatching::CaseInsensitive => self.table.get(tag.to_lowercase().as_str()).copied(),
        }
    }

    /// Resolve a fence tag to the grammar that formats it.
    ///
    /// `None` means the block is not formatted at all; it is not an error.
    pub fn resolve_formatter(&self, tag: &str) -> Option<FormatterId> {
        self.lookup(tag).map(|entry| entry.formatter)
    }

    /// Classify a fence tag into its language family.
    pub fn language_family(&self, tag: &str) -> Option<LanguageFamily> {
        self.lookup(tag).map(|entry| entry.family)
    }

    /// All known tags, sorted by family and then by tag.
    pub fn entries() -> Vec<(&'static str, LanguageEntry)> {
        let mut entries: Vec<_> = LANGUAGE_TABLE.iter().map(|(&tag, &entry)| (tag, entry)).collect();
        entries.sort_by(|a, b| a.1.family.cmp(&b.1.family).then(a.0.cmp(b.0)));
        entries
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new(TagMatching::default())
    }
}

/// Alias table. Every key is lower-case; canonical names map to themselves.
static LANGUAGE_TABLE: LazyLock<HashMap<&'static str, LanguageEntry>> = LazyLock::new(|| {
    use FormatterId as F;
    use LanguageFamily as L;

    let rows: [(&str, FormatterId, LanguageFamily); 23] = [
        // JavaScript
        ("javascript", F::Babel, L::Javascript),
        ("js", F::Babel, L::Javascript),
        ("jsx", F::Babel, L::Javascript),
        ("mjs", F::Babel, L::Javascript),
        ("cjs", F::Babel, L::Javascript),
        // TypeScript
        ("typescript", F::Typescript, L::Typescript),
        ("ts", F::Typescript, L::Typescript),
        ("tsx", F::Typescript, L::Typescript),
        ("mts", F::Typescript, L::Typescript),
        ("cts", F::Typescript, L::Typescript),
        // JSON
        ("json", F::Json, L::Json),
        ("json5", F::Json, L::Json),
        ("jsonc", F::Json, L::Json),
        // HTML
        ("html", F::Html, L::Html),
        ("htm", F::Html, L::Html),
        ("vue", F::Vue, L::Html),
        // CSS
        ("css", F::Css, L::Css),
        ("scss", F::Scss, L::Css),
        ("less", F::Less, L::Css),
        // Markdown
        ("markdown", F::Markdown, L::Markdown),
        ("md", F::Markdown, L::Markdown),
        // YAML
        ("yaml", F::Yaml, L::Yaml),
        ("yml", F::Yaml, L::Yaml),
    ];

    rows.into_iter()
        .map(|(tag, formatter, family)| (tag, LanguageEntry { formatter, family }))
        .collect()
});

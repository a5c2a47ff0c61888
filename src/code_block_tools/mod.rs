//! Formatting of fenced code blocks using external tools.
//!
//! # Overview
//!
//! [`process_markdown`] drives one pass over a document:
//!
//! 1. [`extractor`] finds every ```` ```tag ```` block and records its byte ranges.
//! 2. [`dispatcher`] resolves the tag through [`language`], checks the family's
//!    enable flag and calls a [`FormattingEngine`].
//! 3. [`rewriter`] splices the new bodies back by offset.
//!
//! A block that can't be formatted (unknown tag, disabled family, formatter
//! error or timeout) keeps its original body.
//!
//! # Engines
//!
//! - [`PrettierEngine`] runs `prettier --parser <id> --tab-width <n> ...` per block.
//! - [`BuiltinEngine`] pretty-prints JSON in-process.
//! - [`FallbackEngine`] combines them for `engine = "auto"`.

pub mod builtin;
pub mod dispatcher;
pub mod engine;
pub mod executor;
pub mod extractor;
pub mod language;
pub mod prettier;
pub mod rewriter;

pub use builtin::BuiltinEngine;
pub use dispatcher::{BlockOutcome, Dispatcher};
pub use engine::{
    EngineError, EngineKind, FallbackEngine, FormatRequest, FormattingEngine, FormattingOptions, build_engine,
};
pub use executor::{ExecutorError, ToolExecutor, ToolOutput};
pub use extractor::{CodeBlockMatch, extract_blocks};
pub use language::{FormatterId, LanguageFamily, LanguageResolver, TagMatching};
pub use prettier::PrettierEngine;
pub use rewriter::{Rewrite, RewriteStats, process_markdown};

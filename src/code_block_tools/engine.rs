//! The boundary to code formatting engines.
//!
//! The rewriter never formats code itself. It hands each block body to a
//! [`FormattingEngine`] together with the grammar resolved from the fence tag
//! and the document-wide [`FormattingOptions`].

use super::builtin::BuiltinEngine;
use super::executor::ExecutorError;
use super::language::FormatterId;
use super::prettier::PrettierEngine;
use crate::types::{IndentSize, PrintWidth};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout options shared by every block of one document pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingOptions {
    pub indent_size: IndentSize,
    pub indent_with_tabs: bool,
    pub print_width: PrintWidth,
}

/// One call into an engine.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest<'a> {
    pub parser: FormatterId,
    pub source: &'a str,
    pub options: &'a FormattingOptions,
}

/// Failure reported by an engine. The rewriter absorbs all of these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{engine} cannot format '{parser}' code")]
    Unsupported { engine: &'static str, parser: FormatterId },

    #[error("invalid {parser} source: {message}")]
    Syntax { parser: FormatterId, message: String },

    #[error(transparent)]
    Tool(#[from] ExecutorError),
}

/// A code formatter that can be driven with a grammar name and layout options.
pub trait FormattingEngine: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Format `request.source`, returning the engine's output verbatim.
    ///
    /// # Errors
    /// Any [`EngineError`]; callers treat every error as "leave the code alone".
    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError>;
}

/// Which engine a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// Built-in formatting where available, prettier for everything else
    #[default]
    Auto,
    /// Always shell out to prettier
    Prettier,
    /// Only the in-process formatters; other languages are left unchanged
    Builtin,
}

/// Tries the built-in engine first and falls back when it has no grammar.
pub struct FallbackEngine<P, S> {
    primary: P,
    secondary: S,
}

impl<P: FormattingEngine, S: FormattingEngine> FallbackEngine<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: FormattingEngine, S: FormattingEngine> FormattingEngine for FallbackEngine<P, S> {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError> {
        match self.primary.format(request) {
            Err(EngineError::Unsupported { .. }) => self.secondary.format(request),
            other => other,
        }
    }
}

/// Build the engine selected by `kind`.
pub fn build_engine(kind: EngineKind, prettier_command: &[String], timeout_ms: u64) -> Box<dyn FormattingEngine> {
    match kind {
        EngineKind::Auto => Box::new(FallbackEngine::new(
            BuiltinEngine,
            PrettierEngine::new(prettier_command.to_vec(), timeout_ms),
        )),
        EngineKind::Prettier => Box::new(PrettierEngine::new(prettier_command.to_vec(), timeout_ms)),
        EngineKind::Builtin => Box::new(BuiltinEngine),
    }
}

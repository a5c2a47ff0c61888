//! Per-block formatting policy.
//!
//! Decides whether a block is formatted at all and absorbs every engine
//! failure, so one bad block never stops the rest of the document.

use super::engine::{FormatRequest, FormattingEngine, FormattingOptions};
use super::extractor::contains_closing_fence;
use super::language::{LanguageFamily, LanguageResolver, TagMatching};
use crate::config::LanguageToggles;

/// What happened to one block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// The tag is not in the alias table.
    Unsupported,
    /// The tag's family is switched off in the settings.
    Disabled(LanguageFamily),
    /// The engine succeeded; holds the new body (possibly equal to the old).
    Formatted(String),
    /// The engine failed; the body stays as it was.
    Failed,
}

/// Formats block bodies with one fixed set of options.
pub struct Dispatcher<'a> {
    resolver: LanguageResolver,
    options: FormattingOptions,
    languages: LanguageToggles,
    engine: &'a dyn FormattingEngine,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        engine: &'a dyn FormattingEngine,
        options: FormattingOptions,
        languages: LanguageToggles,
        tag_matching: TagMatching,
    ) -> Self {
        Self {
            resolver: LanguageResolver::new(tag_matching),
            options,
            languages,
            engine,
        }
    }

    /// Run the policy for one block and report the outcome.
    pub fn dispatch(&self, body: &str, language: &str) -> BlockOutcome {
        let Some(parser) = self.resolver.resolve_formatter(language) else {
            log::debug!("No formatter for '{language}', leaving block unchanged");
            return BlockOutcome::Unsupported;
        };

        if let Some(family) = self.resolver.language_family(language)
            && !self.languages.is_enabled(family)
        {
            log::debug!("Formatting disabled for {family}, leaving '{language}' block unchanged");
            return BlockOutcome::Disabled(family);
        }

        let request = FormatRequest {
            parser,
            source: body,
            options: &self.options,
        };

        match self.engine.format(&request) {
            Ok(mut output) => {
                // Formatters end their output with a newline; the closing fence supplies its own
                if output.ends_with('\n') {
                    output.pop();
                }
                if contains_closing_fence(&output) {
                    log::warn!(
                        "Output for '{language}' block from {} contains a closing fence, leaving block unchanged",
                        self.engine.name()
                    );
                    return BlockOutcome::Failed;
                }
                BlockOutcome::Formatted(output)
            }
            Err(e) => {
                log::warn!("Failed to format '{language}' block with {}: {e}", self.engine.name());
                BlockOutcome::Failed
            }
        }
    }

    /// Format one block body, returning it unchanged whenever it can't be formatted.
    pub fn format_one(&self, body: &str, language: &str) -> String {
        match self.dispatch(body, language) {
            BlockOutcome::Formatted(output) => output,
            _ => body.to_string(),
        }
    }
}

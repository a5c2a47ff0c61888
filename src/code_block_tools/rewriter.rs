//! Document rewriting.
//!
//! Blocks are found once, formatted independently and then spliced back by
//! their recorded byte ranges. Text outside the block bodies, including the
//! fences and their tags, is copied through untouched.

use super::dispatcher::{BlockOutcome, Dispatcher};
use super::extractor::{CodeBlockMatch, extract_blocks};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::borrow::Cow;

/// Blocks needed before formatting is spread over the rayon pool.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_BLOCKS: usize = 2;

/// Counters describing one pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Every recognized block, including empty ones.
    pub blocks: usize,
    /// Blocks whose body was replaced with different text.
    pub formatted: usize,
    /// Blocks the engine accepted but left as they were.
    pub unchanged: usize,
    pub unsupported: usize,
    pub disabled: usize,
    pub failed: usize,
}

/// Output of [`process_markdown`].
#[derive(Debug, Clone)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub stats: RewriteStats,
}

impl Rewrite<'_> {
    /// Whether any block body changed. When false, `content` is the input.
    pub fn changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

/// Format every recognized code block in `document`.
pub fn process_markdown<'a>(document: &'a str, dispatcher: &Dispatcher<'_>) -> Rewrite<'a> {
    let blocks = extract_blocks(document);

    // Empty bodies have nowhere to put formatter output between the fences
    let eligible: Vec<&CodeBlockMatch> = blocks.iter().filter(|block| !block.body.is_empty()).collect();
    let mut stats = RewriteStats {
        blocks: blocks.len(),
        unchanged: blocks.len() - eligible.len(),
        ..Default::default()
    };
    let outcomes = format_blocks(document, &eligible, dispatcher);

    let mut replacements = Vec::new();
    for (block, outcome) in eligible.into_iter().zip(outcomes) {
        match outcome {
            BlockOutcome::Formatted(body) if body != block.body(document) => {
                stats.formatted += 1;
                replacements.push((block, body));
            }
            BlockOutcome::Formatted(_) => stats.unchanged += 1,
            BlockOutcome::Unsupported => stats.unsupported += 1,
            BlockOutcome::Disabled(_) => stats.disabled += 1,
            BlockOutcome::Failed => stats.failed += 1,
        }
    }

    if replacements.is_empty() {
        return Rewrite {
            content: Cow::Borrowed(document),
            stats,
        };
    }

    Rewrite {
        content: Cow::Owned(splice(document, &replacements)),
        stats,
    }
}

#[cfg(feature = "parallel")]
fn format_blocks(document: &str, blocks: &[&CodeBlockMatch], dispatcher: &Dispatcher<'_>) -> Vec<BlockOutcome> {
    if blocks.len() < MIN_PARALLEL_BLOCKS {
        return format_blocks_sequential(document, blocks, dispatcher);
    }
    blocks
        .par_iter()
        .map(|block| dispatcher.dispatch(block.body(document), &block.language))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn format_blocks(document: &str, blocks: &[&CodeBlockMatch], dispatcher: &Dispatcher<'_>) -> Vec<BlockOutcome> {
    format_blocks_sequential(document, blocks, dispatcher)
}

fn format_blocks_sequential(
    document: &str,
    blocks: &[&CodeBlockMatch],
    dispatcher: &Dispatcher<'_>,
) -> Vec<BlockOutcome> {
    blocks
        .iter()
        .map(|block| dispatcher.dispatch(block.body(document), &block.language))
        .collect()
}

/// Rebuild the document with each block body swapped for its replacement.
///
/// `replacements` must be in document order with non-overlapping ranges,
/// which is what the extractor produces.
fn splice(document: &str, replacements: &[(&CodeBlockMatch, String)]) -> String {
    let extra: usize = replacements.iter().map(|(_, body)| body.len()).sum();
    let mut out = String::with_capacity(document.len() + extra);
    let mut cursor = 0;

    for (block, body) in replacements {
        out.push_str(&document[cursor..block.body.start]);
        out.push_str(body);
        cursor = block.body.end;
    }
    out.push_str(&document[cursor..]);
    out
}

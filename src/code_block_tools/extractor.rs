//! Fenced code block extraction.
//!
//! A narrow, line-oriented scanner. It recognizes only blocks of
//! the shape
//!
//! ````text
//! ```tag
//! body
//! ```
//! ````
//!
//! where the opening fence starts the line and the tag directly follows the
//! backticks. Everything else (untagged fences, tilde fences, indented fences,
//! info strings after the tag, unclosed fences) is left to the surrounding
//! text.

use std::ops::Range;

const FENCE: &str = "```";

/// A fenced code block found in a document.
///
/// Holds byte ranges into the scanned document rather than copies, so the
/// rewriter can splice by offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockMatch {
    /// Language tag exactly as written after the opening fence.
    pub language: String,
    /// Full match, from the opening backticks to the end of the closing fence.
    pub span: Range<usize>,
    /// Text between the opening-fence newline and the newline before the
    /// closing fence. Empty when the closing fence directly follows the
    /// opening line.
    pub body: Range<usize>,
    /// 0-indexed line of the opening fence.
    pub start_line: usize,
}

impl CodeBlockMatch {
    /// The verbatim match, including both fences.
    pub fn full_text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.span.clone()]
    }

    /// The verbatim body.
    pub fn body<'a>(&self, document: &'a str) -> &'a str {
        &document[self.body.clone()]
    }
}

/// Where the scanner is while walking the document line by line.
enum State {
    Outside,
    Inside {
        language: String,
        fence_start: usize,
        content_start: usize,
        start_line: usize,
    },
}

/// Scan `document` and return every recognized block in document order.
pub fn extract_blocks(document: &str) -> Vec<CodeBlockMatch> {
    let mut blocks = Vec::new();
    let mut state = State::Outside;
    let mut offset = 0;

    for (line_index, raw_line) in document.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len();
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);

        state = match state {
            State::Outside => match opening_tag(line) {
                // An opening fence on the last line has no newline, so it can't open a block
                Some(tag) if raw_line.ends_with('\n') => State::Inside {
                    language: tag.to_string(),
                    fence_start: line_start,
                    content_start: offset,
                    start_line: line_index,
                },
                _ => State::Outside,
            },
            State::Inside {
                language,
                fence_start,
                content_start,
                start_line,
            } => {
                if is_closing_fence(line) {
                    // The newline ending the last body line belongs to the fence
                    let body_end = line_start.saturating_sub(1).max(content_start);
                    blocks.push(CodeBlockMatch {
                        language,
                        span: fence_start..line_start + line.len(),
                        body: content_start..body_end,
                        start_line,
                    });
                    State::Outside
                } else {
                    State::Inside {
                        language,
                        fence_start,
                        content_start,
                        start_line,
                    }
                }
            }
        };
    }

    if let State::Inside { language, start_line, .. } = state {
        log::debug!("Ignoring unclosed '{language}' fence opened on line {}", start_line + 1);
    }

    blocks
}

/// Return the tag if `line` is an opening fence of the recognized shape.
fn opening_tag(line: &str) -> Option<&str> {
    let tag = line.strip_prefix(FENCE)?;
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '+' || c == '-');
    valid.then_some(tag)
}

fn is_closing_fence(line: &str) -> bool {
    line.trim_end_matches([' ', '\t']) == FENCE
}

/// Whether any line of `text` would close a block if placed inside one.
pub fn contains_closing_fence(text: &str) -> bool {
    text.split('\n').any(is_closing_fence)
}

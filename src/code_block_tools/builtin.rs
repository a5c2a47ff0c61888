//! In-process formatters that need no external tooling.
//!
//! Only JSON is handled here. Object key order and number spelling are kept
//! as written; only whitespace changes.

use super::engine::{EngineError, FormatRequest, FormattingEngine};
use super::language::FormatterId;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEngine;

impl BuiltinEngine {
    fn format_json(request: &FormatRequest<'_>) -> Result<String, EngineError> {
        let value: serde_json::Value = serde_json::from_str(request.source).map_err(|e| EngineError::Syntax {
            parser: request.parser,
            message: e.to_string(),
        })?;

        let indent = if request.options.indent_with_tabs {
            "\t".to_string()
        } else {
            " ".repeat(request.options.indent_size.as_usize())
        };

        let mut out = Vec::with_capacity(request.source.len() + 16);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut serializer).map_err(|e| EngineError::Syntax {
            parser: request.parser,
            message: e.to_string(),
        })?;

        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl FormattingEngine for BuiltinEngine {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError> {
        match request.parser {
            FormatterId::Json => Self::format_json(request),
            parser => Err(EngineError::Unsupported {
                engine: "builtin",
                parser,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_block_tools::engine::FormattingOptions;
    use crate::types::IndentSize;

    fn format(source: &str, options: &FormattingOptions) -> Result<String, EngineError> {
        BuiltinEngine.format(&FormatRequest {
            parser: FormatterId::Json,
            source,
            options,
        })
    }

    #[test]
    fn test_pretty_prints_with_two_spaces() {
        let out = format("{\"a\":1}", &FormattingOptions::default()).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_indent_size_and_tabs() {
        let four = FormattingOptions {
            indent_size: IndentSize::new(4).unwrap(),
            ..Default::default()
        };
        assert_eq!(format("[1]", &four).unwrap(), "[\n    1\n]");

        let tabs = FormattingOptions {
            indent_with_tabs: true,
            ..Default::default()
        };
        assert_eq!(format("{\"k\":[true]}", &tabs).unwrap(), "{\n\t\"k\": [\n\t\ttrue\n\t]\n}");
    }

    #[test]
    fn test_key_order_and_numbers_preserved() {
        let out = format("{\"z\":1.50,\"a\":12345678901234567890}", &FormattingOptions::default()).unwrap();
        assert_eq!(out, "{\n  \"z\": 1.50,\n  \"a\": 12345678901234567890\n}");
    }

    #[test]
    fn test_idempotent() {
        let options = FormattingOptions::default();
        let once = format("{\"a\":{\"b\":[1,2]}}", &options).unwrap();
        let twice = format(&once, &options).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_json_is_syntax_error() {
        let result = format("{\"a\":", &FormattingOptions::default());
        assert!(matches!(result, Err(EngineError::Syntax { .. })));
    }

    #[test]
    fn test_other_grammars_unsupported() {
        let options = FormattingOptions::default();
        let result = BuiltinEngine.format(&FormatRequest {
            parser: FormatterId::Babel,
            source: "let a",
            options: &options,
        });
        assert!(matches!(result, Err(EngineError::Unsupported { .. })));
    }
}

//! Property tests for document rewriting through the public library API.

use fencefmt_lib::code_block_tools::{
    BuiltinEngine, Dispatcher, EngineError, FormatRequest, FormattingEngine, FormattingOptions, TagMatching,
    extract_blocks, process_markdown,
};
use fencefmt_lib::config::{LanguageToggles, Settings};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Wraps each body in angle brackets, ending with a newline like real formatters.
struct Bracket;

impl FormattingEngine for Bracket {
    fn name(&self) -> &'static str {
        "bracket"
    }

    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError> {
        Ok(format!("<{}>\n", request.source))
    }
}

/// Returns its input, so no body ever changes.
struct Identity;

impl FormattingEngine for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError> {
        Ok(format!("{}\n", request.source))
    }
}

fn dispatcher(engine: &dyn FormattingEngine) -> Dispatcher<'_> {
    Dispatcher::new(
        engine,
        FormattingOptions::default(),
        LanguageToggles::default(),
        TagMatching::Exact,
    )
}

fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 #*.,!-]{0,30}", 0..4).prop_map(|lines| {
        lines.into_iter().map(|line| format!("{line}\n")).collect()
    })
}

fn body() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9 {}:,\\[\\]]{1,20}", 1..4).prop_map(|lines| lines.join("\n"))
}

fn tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["js", "json", "yml", "css", "ts", "md"])
}

fn fence(tag: &str, body: &str) -> String {
    format!("```{tag}\n{body}\n```\n")
}

proptest! {
    #[test]
    fn rewrite_only_touches_block_bodies(
        parts in prop::collection::vec((prose(), tag(), body()), 0..6),
        tail in prose(),
    ) {
        let mut document = String::new();
        let mut expected = String::new();
        for (text, tag, body) in &parts {
            document.push_str(text);
            document.push_str(&fence(tag, body));
            expected.push_str(text);
            expected.push_str(&fence(tag, &format!("<{body}>")));
        }
        document.push_str(&tail);
        expected.push_str(&tail);

        let rewrite = process_markdown(&document, &dispatcher(&Bracket));

        prop_assert_eq!(&*rewrite.content, expected.as_str());
        prop_assert_eq!(rewrite.stats.blocks, parts.len());
        prop_assert_eq!(rewrite.stats.formatted, parts.len());
    }

    #[test]
    fn identical_blocks_are_each_rewritten(count in 1usize..8, tag in tag(), body in body()) {
        let block = fence(tag, &body);
        let document = vec![block.as_str(); count].join("\nbetween\n\n");

        let rewrite = process_markdown(&document, &dispatcher(&Bracket));

        prop_assert_eq!(extract_blocks(&document).len(), count);
        prop_assert_eq!(rewrite.content.matches(&format!("<{body}>")).count(), count);
        prop_assert_eq!(rewrite.stats.formatted, count);
    }

    #[test]
    fn unchanged_bodies_return_the_input(
        parts in prop::collection::vec((prose(), tag(), body()), 0..5),
    ) {
        let document: String = parts.iter().map(|(text, tag, body)| format!("{text}{}", fence(tag, body))).collect();

        let rewrite = process_markdown(&document, &dispatcher(&Identity));

        prop_assert!(!rewrite.changed());
        prop_assert_eq!(&*rewrite.content, document.as_str());
    }

    #[test]
    fn builtin_json_formatting_is_idempotent(
        entries in prop::collection::vec(("[a-z]{1,6}", any::<i32>(), any::<bool>()), 0..6),
    ) {
        let object: Vec<String> = entries
            .iter()
            .map(|(key, number, flag)| format!("\"{key}\":[{number},{flag}]"))
            .collect();
        let document = format!("Intro\n\n```json\n{{{}}}\n```\n", object.join(","));
        let settings = Settings::default();
        let dispatcher = Dispatcher::new(
            &BuiltinEngine,
            settings.formatting_options(),
            settings.languages,
            settings.tag_matching,
        );

        let once = process_markdown(&document, &dispatcher).content.into_owned();
        let twice = process_markdown(&once, &dispatcher);

        prop_assert!(!twice.changed());
        prop_assert_eq!(&*twice.content, once.as_str());
    }
}

#[test]
fn unsupported_tag_survives_with_its_tag() {
    let document = "Before\n\n```brainfuck\n++++[>++<-]>.\n```\n\nAfter `inline` code\n";
    let rewrite = process_markdown(document, &dispatcher(&Bracket));

    assert_eq!(rewrite.content, document);
    assert_eq!(rewrite.stats.unsupported, 1);
}

#[test]
fn disabled_family_survives() {
    let mut languages = LanguageToggles::default();
    languages.yaml = false;
    let dispatcher = Dispatcher::new(&Bracket, FormattingOptions::default(), languages, TagMatching::Exact);
    let document = "```yml\na: 1\n```\n```yaml\nb: 2\n```\n```json\n{}\n```\n";

    let rewrite = process_markdown(document, &dispatcher);

    assert_eq!(rewrite.content, "```yml\na: 1\n```\n```yaml\nb: 2\n```\n```json\n<{}>\n```\n");
    assert_eq!(rewrite.stats.disabled, 2);
}

#[test]
fn format_markdown_uses_settings() {
    let settings: Settings = toml::from_str("engine = \"builtin\"\nindent-with-tabs = true\n").unwrap();
    let rewrite = fencefmt_lib::format_markdown("```json\n{\"a\":1}\n```", &settings);

    assert_eq!(rewrite.content, "```json\n{\n\t\"a\": 1\n}\n```");
}

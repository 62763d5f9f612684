//! Property-based tests for the formatting pipeline.
//!
//! These complement the golden tests in `format_tests.rs` with generated
//! inputs: escaping must round-trip through a standard XML unescaper, the
//! output normalizer must be idempotent, and formatting must be a
//! deterministic function that yields re-parseable output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use canonix_fmt::{escape_text, normalize_output, EscapeMode, FormatOptions};
use canonix_sax::pretty_print;
use proptest::prelude::*;

fn options() -> FormatOptions {
    FormatOptions::with_classes(&["root", "div"], &["p"], &["i"])
}

proptest! {
    #[test]
    fn named_escaping_round_trips(text in "[ a-z&<>]{0,40}") {
        let escaped = escape_text(&text, EscapeMode::Named);
        let restored = quick_xml::escape::unescape(&escaped).expect("valid escapes");
        prop_assert_eq!(restored.into_owned(), text);
    }

    #[test]
    fn hex_escaping_round_trips(text in "[ a-z&<>]{0,40}") {
        let escaped = escape_text(&text, EscapeMode::Hex);
        let restored = quick_xml::escape::unescape(&escaped).expect("valid escapes");
        prop_assert_eq!(restored.into_owned(), text);
    }

    #[test]
    fn normalizer_is_idempotent(text in "[ \t\na-z<>/]{0,60}") {
        let once = normalize_output(&text);
        prop_assert_eq!(normalize_output(&once), once);
    }

    #[test]
    fn formatting_is_deterministic(text in "[ a-z0-9&<>'\"]{0,40}") {
        let input = format!("<root><p>{}</p></root>", escape_text(&text, EscapeMode::Named));
        let first = pretty_print(&input, options());
        let second = pretty_print(&input, options());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn formatted_output_reparses_cleanly(text in "[ a-z0-9&<>'\"]{0,40}") {
        let input = format!("<root><p>{}</p></root>", escape_text(&text, EscapeMode::Named));
        let output = pretty_print(&input, options()).expect("well-formed input");

        let mut reader = quick_xml::Reader::from_str(&output);
        let mut reparse_error = None;
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    reparse_error = Some(err);
                    break;
                }
            }
        }
        prop_assert!(reparse_error.is_none(), "reparse failed: {reparse_error:?}");
    }
}

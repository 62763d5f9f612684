//! Canonix formatting engine.
//!
//! Reformats well-formed XML into a canonical, human-readable form, driven by
//! per-element-name formatting classes (block, compact, inline) and a
//! whitespace policy. The engine consumes a lexical event stream pushed by an
//! upstream parser; it never parses raw bytes and never validates structure.
//!
//! # Architecture
//!
//! - [`classify`]: element name → formatting class lookup, built once per run
//! - [`escape`]: static escape tables for reserved characters
//! - [`formatter`]: the event-driven formatting state machine (the core)
//! - [`emitter`]: output buffer and the final normalization pass
//! - [`config`] / [`error`]: options with constructor-time validation
//!
//! Formatting is a pure, deterministic function of the event stream and the
//! options: same input, same output, always.

pub mod classify;
pub mod config;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod formatter;

pub use classify::{Classifier, ElementClass};
pub use config::FormatOptions;
pub use emitter::{normalize_output, StringEmitter};
pub use error::{ConfigError, FormatError};
pub use escape::{escape_attribute, escape_text, EscapeMode};
pub use formatter::Formatter;

use canonix_event::XmlEvent;

/// Format a complete event stream in one call.
///
/// Equivalent to feeding each event to a fresh [`Formatter`] and finishing.
pub fn format_events<I>(events: I, options: FormatOptions) -> Result<String, FormatError>
where
    I: IntoIterator<Item = XmlEvent>,
{
    let mut formatter = Formatter::new(options)?;
    for event in events {
        formatter.handle(event)?;
    }
    formatter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn events() -> Vec<XmlEvent> {
        vec![
            XmlEvent::StartDocument,
            XmlEvent::open("root"),
            XmlEvent::open("p"),
            XmlEvent::close("p"),
            XmlEvent::close("root"),
            XmlEvent::EndDocument,
        ]
    }

    fn options() -> FormatOptions {
        FormatOptions::with_classes(&["root"], &["p"], &["i"])
    }

    #[test]
    fn format_events_runs_a_whole_stream() {
        let output = format_events(events(), options());
        assert_eq!(output, Ok("<root>\n  <p/>\n</root>".to_owned()));
    }

    #[test]
    fn same_stream_same_options_same_output() {
        let first = format_events(events(), options());
        let second = format_events(events(), options());
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_options_fail_before_any_event() {
        let mut options = options();
        options.inline.insert("p".to_owned());
        let result = format_events(events(), options);
        assert_eq!(
            result,
            Err(FormatError::Config(ConfigError::OverlappingClass {
                name: "p".to_owned()
            }))
        );
    }
}

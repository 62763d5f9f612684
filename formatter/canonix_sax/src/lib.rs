//! quick-xml driver for the Canonix formatter.
//!
//! This crate is the upstream-collaborator half of the pipeline: it pulls
//! lexical events from [`quick-xml`], translates them into the
//! [`canonix_event::XmlEvent`] shapes the formatting engine consumes, and
//! returns the finished string. Well-formedness checking belongs to the
//! parser; the formatter trusts the stream's ordering.
//!
//! ```
//! use canonix_fmt::FormatOptions;
//! use canonix_sax::pretty_print;
//!
//! let options = FormatOptions::with_classes(&["root"], &["p"], &["i"]);
//! let output = pretty_print("<root><p/></root>", options)?;
//! assert_eq!(output, "<root>\n  <p/>\n</root>");
//! # Ok::<(), canonix_fmt::FormatError>(())
//! ```
//!
//! [`quick-xml`]: https://docs.rs/quick-xml

mod driver;

pub use driver::{pretty_print, PrettyPrinter};

//! Error types for configuration validation and formatting runs.
//!
//! Errors are returned, never thrown: the boundary between "the parser
//! failed" and "the formatter was misused" stays explicit at the crate's
//! interface. There is no recovery path; a well-formedness failure
//! invalidates any output produced so far.

use thiserror::Error;

/// Invalid option combinations, rejected when a formatter is constructed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// An element name is a member of more than one formatting class set.
    #[error("element name `{name}` appears in more than one of the block/compact/inline sets")]
    OverlappingClass { name: String },

    /// The indent unit contains a line break, which the output normalizer
    /// would collapse again.
    #[error("indent unit must not contain line breaks")]
    IndentWithLineBreak,
}

/// Fatal failures during a formatting run.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    /// The upstream parser signaled a well-formedness failure. Any buffered
    /// output is untrusted and discarded. `offset` is the byte position
    /// reported by the parser, when it provides one.
    #[error("malformed XML: {message}")]
    WellFormedness {
        message: String,
        offset: Option<u64>,
    },

    /// The event stream ended with elements still open. This indicates a
    /// defective event source, not malformed input; a conforming parser
    /// reports mismatched tags as a parse error first.
    #[error("unbalanced event stream: {depth} element(s) still open at end of document")]
    UnbalancedStream { depth: usize },

    /// Construction-time validation failure surfaced through the one-call
    /// formatting entry points.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

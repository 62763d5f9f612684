//! Lexical XML event model.
//!
//! The formatter consumes a sequential stream of [`XmlEvent`]s pushed by an
//! upstream parser. Keeping the event shapes in their own crate decouples the
//! formatting engine from any particular parser library: any frontend that
//! can produce this enum in document order can drive the formatter.

mod event;

pub use event::{Attribute, XmlDeclaration, XmlEvent};

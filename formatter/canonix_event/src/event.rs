//! Event types emitted by an upstream XML parser.
//!
//! One variant per lexical event kind. The upstream parser is responsible for
//! well-formedness checking; a fatal failure there arrives as
//! [`XmlEvent::ParseError`] and terminates the stream.

use std::fmt;

/// A single element attribute, in document order.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

/// The `<?xml ...?>` declaration, with each attribute optional.
///
/// Rendering order is fixed: `version`, `encoding`, `standalone`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct XmlDeclaration {
    pub version: Option<String>,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

/// A lexical XML event, pushed strictly in document order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum XmlEvent {
    /// Start of the document stream. Resets all formatter state.
    StartDocument,
    /// End of the document stream. Triggers finalization.
    EndDocument,
    /// Opening tag with its attributes in input order.
    StartElement {
        name: String,
        attributes: Vec<Attribute>,
    },
    /// Closing tag.
    EndElement { name: String },
    /// Character data between tags, with entities already resolved.
    Characters(String),
    /// Comment body, without the `<!--`/`-->` delimiters.
    Comment(String),
    /// CDATA section body, without the section delimiters.
    Cdata(String),
    /// Processing instruction. `content` excludes the target.
    ProcessingInstruction { target: String, content: String },
    /// The XML declaration.
    XmlDeclaration(XmlDeclaration),
    /// Document type declaration, as raw text ready for output.
    Doctype(String),
    /// Fatal well-formedness failure reported by the parser.
    ParseError {
        message: String,
        /// Byte offset into the input, when the parser provides one.
        offset: Option<u64>,
    },
}

impl XmlEvent {
    /// Convenience constructor for a start tag without attributes.
    pub fn open(name: impl Into<String>) -> Self {
        XmlEvent::StartElement {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Convenience constructor for a closing tag.
    pub fn close(name: impl Into<String>) -> Self {
        XmlEvent::EndElement { name: name.into() }
    }

    /// Convenience constructor for character data.
    pub fn text(text: impl Into<String>) -> Self {
        XmlEvent::Characters(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_builds_attributeless_start() {
        let event = XmlEvent::open("root");
        assert_eq!(
            event,
            XmlEvent::StartElement {
                name: "root".to_owned(),
                attributes: vec![],
            }
        );
    }

    #[test]
    fn attribute_debug_is_compact() {
        let attr = Attribute::new("href", "style.xsl");
        assert_eq!(format!("{attr:?}"), "href=\"style.xsl\"");
    }

    #[test]
    fn declaration_defaults_to_all_absent() {
        let decl = XmlDeclaration::default();
        assert_eq!(decl.version, None);
        assert_eq!(decl.encoding, None);
        assert_eq!(decl.standalone, None);
    }
}

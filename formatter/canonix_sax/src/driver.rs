//! Event-loop adapter from `quick-xml` pull events to formatter push events.
//!
//! One conversion per call: a fresh [`Formatter`] is built for each document,
//! fed in document order, and finished at EOF. Reader failures terminate the
//! run immediately; no partial output survives them.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use tracing::debug;

use canonix_event::{Attribute, XmlDeclaration, XmlEvent};
use canonix_fmt::{Classifier, ConfigError, FormatError, FormatOptions, Formatter};

/// Reusable entry point binding a validated configuration.
///
/// Holds options only; every [`pretty_print`](Self::pretty_print) call runs
/// with a fresh formatter, so one printer may format any number of documents
/// sequentially.
pub struct PrettyPrinter {
    options: FormatOptions,
}

impl PrettyPrinter {
    /// Create a printer, validating the options eagerly so configuration
    /// failures surface before any input is read.
    pub fn new(options: FormatOptions) -> Result<Self, ConfigError> {
        Classifier::from_options(&options)?;
        Ok(PrettyPrinter { options })
    }

    /// Reformat one XML document into its canonical form.
    pub fn pretty_print(&self, input: &str) -> Result<String, FormatError> {
        debug!(bytes = input.len(), "pretty-printing document");
        let mut formatter = Formatter::new(self.options.clone())?;
        let mut reader = Reader::from_str(input);

        formatter.handle(XmlEvent::StartDocument)?;
        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    let event = self.start_event(&start, reader.buffer_position())?;
                    formatter.handle(event)?;
                }
                Ok(Event::Empty(start)) => {
                    // An empty-element tag flows through the same self-close
                    // policy as an explicit start/end pair.
                    let name = self.element_name(start.name());
                    let event = self.start_event(&start, reader.buffer_position())?;
                    formatter.handle(event)?;
                    formatter.handle(XmlEvent::EndElement { name })?;
                }
                Ok(Event::End(end)) => {
                    let name = self.element_name(end.name());
                    formatter.handle(XmlEvent::EndElement { name })?;
                }
                Ok(Event::Text(text)) => {
                    let position = reader.buffer_position();
                    let text = text
                        .unescape()
                        .map_err(|err| parse_failure(&err, position))?
                        .into_owned();
                    formatter.handle(XmlEvent::Characters(text))?;
                }
                Ok(Event::CData(cdata)) => {
                    let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    formatter.handle(XmlEvent::Cdata(text))?;
                }
                Ok(Event::Comment(comment)) => {
                    let text = String::from_utf8_lossy(&comment).into_owned();
                    formatter.handle(XmlEvent::Comment(text))?;
                }
                Ok(Event::PI(pi)) => {
                    let target = String::from_utf8_lossy(pi.target()).into_owned();
                    // quick-xml's `content()` always includes the leading whitespace
                    // separator; the XmlEvent contract says content excludes the target,
                    // and the formatter inserts its own separator.
                    let content = String::from_utf8_lossy(pi.content()).trim_start().to_owned();
                    formatter.handle(XmlEvent::ProcessingInstruction { target, content })?;
                }
                Ok(Event::Decl(decl)) => {
                    let declaration = XmlDeclaration {
                        version: decl
                            .version()
                            .ok()
                            .map(|v| String::from_utf8_lossy(&v).into_owned()),
                        encoding: decl
                            .encoding()
                            .and_then(|v| v.ok())
                            .map(|v| String::from_utf8_lossy(&v).into_owned()),
                        standalone: decl
                            .standalone()
                            .and_then(|v| v.ok())
                            .map(|v| String::from_utf8_lossy(&v).into_owned()),
                    };
                    formatter.handle(XmlEvent::XmlDeclaration(declaration))?;
                }
                Ok(Event::DocType(doctype)) => {
                    let raw = String::from_utf8_lossy(&doctype);
                    let doctype = format!("<!DOCTYPE {}>", raw.trim());
                    formatter.handle(XmlEvent::Doctype(doctype))?;
                }
                Ok(Event::Eof) => break,
                Err(err) => return Err(parse_failure(&err, reader.buffer_position())),
            }
        }
        formatter.handle(XmlEvent::EndDocument)?;
        formatter.finish()
    }

    /// Translate a start tag, flattening namespaces unless configured
    /// to pass them through.
    fn start_event(&self, start: &BytesStart<'_>, position: u64) -> Result<XmlEvent, FormatError> {
        let name = self.element_name(start.name());
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| parse_failure(&err, position))?;
            if !self.options.use_namespaces && is_namespace_declaration(attr.key) {
                continue;
            }
            let attr_name = if self.options.use_namespaces {
                String::from_utf8_lossy(attr.key.as_ref()).into_owned()
            } else {
                String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned()
            };
            let value = attr
                .unescape_value()
                .map_err(|err| parse_failure(&err, position))?
                .into_owned();
            attributes.push(Attribute::new(attr_name, value));
        }
        Ok(XmlEvent::StartElement { name, attributes })
    }

    fn element_name(&self, qname: QName<'_>) -> String {
        if self.options.use_namespaces {
            String::from_utf8_lossy(qname.as_ref()).into_owned()
        } else {
            String::from_utf8_lossy(qname.local_name().as_ref()).into_owned()
        }
    }
}

/// Reformat one document in a single call.
pub fn pretty_print(input: &str, options: FormatOptions) -> Result<String, FormatError> {
    PrettyPrinter::new(options)?.pretty_print(input)
}

/// A reader failure is a well-formedness failure from the formatter's point
/// of view; the byte offset comes from the reader.
fn parse_failure(err: &dyn fmt::Display, offset: u64) -> FormatError {
    FormatError::WellFormedness {
        message: err.to_string(),
        offset: Some(offset),
    }
}

fn is_namespace_declaration(key: QName<'_>) -> bool {
    let raw = key.as_ref();
    raw == b"xmlns" || raw.starts_with(b"xmlns:")
}

//! Formatting State Machine
//!
//! Consumes the lexical event stream in document order and emits formatted
//! text into an owned output buffer. All design weight lives here: nesting
//! depth, nearest-context classification, pending self-close decisions, and
//! the whitespace policy.
//!
//! # State
//!
//! - A stack of open-element frames. Depth is the stack length; only the top
//!   frame (the nearest enclosing element) ever influences a decision. The
//!   stack exists so the nearest context is restored when an element closes,
//!   and to carry the per-element promotion flag.
//! - `open_tag`: the most recently opened element, cleared as soon as any
//!   content is emitted inside it. An element whose tag is still pending at
//!   its end event collapses to self-closing form.
//! - An instruction list holding the XML declaration, processing
//!   instructions, and doctype, prepended to the body at finalization.


use canonix_event::{Attribute, XmlDeclaration, XmlEvent};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::classify::{Classifier, ElementClass};
use crate::config::FormatOptions;
use crate::emitter::{normalize_output, StringEmitter};
use crate::error::{ConfigError, FormatError};
use crate::escape::{escape_attribute, escape_text};

/// One open element on the context stack.
struct Frame {
    class: ElementClass,
    /// Text directly under this element keeps its line breaks.
    keep_linebreaks: bool,
    /// A block or compact child was opened directly inside this element.
    /// A promoted compact element closes with block-style indentation.
    promoted: bool,
}

/// Event-driven XML formatter. One instance formats exactly one document;
/// create a fresh one per conversion.
pub struct Formatter {
    options: FormatOptions,
    classifier: Classifier,
    frames: Vec<Frame>,
    open_tag: Option<String>,
    emitter: StringEmitter,
    instructions: Vec<String>,
    result: Option<String>,
}

impl Formatter {
    /// Create a formatter, validating the options.
    pub fn new(options: FormatOptions) -> Result<Self, ConfigError> {
        let classifier = Classifier::from_options(&options)?;
        Ok(Formatter {
            options,
            classifier,
            frames: Vec::new(),
            open_tag: None,
            emitter: StringEmitter::new(),
            instructions: Vec::new(),
            result: None,
        })
    }

    /// Consume one event. Events must arrive strictly in document order.
    pub fn handle(&mut self, event: XmlEvent) -> Result<(), FormatError> {
        trace!(depth = self.depth(), ?event, "xml event");
        match event {
            XmlEvent::StartDocument => {
                self.reset();
                Ok(())
            }
            XmlEvent::EndDocument => self.end_document(),
            XmlEvent::StartElement { name, attributes } => {
                self.start_element(&name, &attributes);
                Ok(())
            }
            XmlEvent::EndElement { name } => {
                self.end_element(&name);
                Ok(())
            }
            XmlEvent::Characters(text) => {
                self.characters(&text);
                Ok(())
            }
            XmlEvent::Comment(text) => {
                self.comment(&text);
                Ok(())
            }
            XmlEvent::Cdata(text) => {
                self.cdata(&text);
                Ok(())
            }
            XmlEvent::ProcessingInstruction { target, content } => {
                self.processing_instruction(&target, &content);
                Ok(())
            }
            XmlEvent::XmlDeclaration(decl) => {
                self.xml_declaration(&decl);
                Ok(())
            }
            XmlEvent::Doctype(raw) => {
                self.instructions.push(raw);
                Ok(())
            }
            XmlEvent::ParseError { message, offset } => {
                Err(FormatError::WellFormedness { message, offset })
            }
        }
    }

    /// Produce the final string, finalizing first if the stream carried no
    /// explicit end-of-document event.
    pub fn finish(mut self) -> Result<String, FormatError> {
        if self.result.is_none() {
            self.end_document()?;
        }
        Ok(self.result.unwrap_or_default())
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Class of the nearest enclosing element.
    fn context(&self) -> ElementClass {
        self.frames.last().map_or(ElementClass::Default, |f| f.class)
    }

    fn keep_linebreaks(&self) -> bool {
        self.frames.last().is_some_and(|f| f.keep_linebreaks)
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.open_tag = None;
        self.emitter = StringEmitter::new();
        self.instructions.clear();
        self.result = None;
    }

    /// Newline plus `levels` indent units. At the very start of the buffer
    /// the newline is omitted to avoid a leading blank line.
    fn break_and_indent(&mut self, levels: usize) {
        if !self.emitter.is_empty() {
            self.emitter.emit_newline();
        }
        self.emitter.emit_indent(&self.options.indent_unit, levels);
    }

    fn start_element(&mut self, name: &str, attributes: &[Attribute]) {
        let class = self.classifier.classify(name);
        if class.breaks_before_open() {
            if let Some(parent) = self.frames.last_mut() {
                parent.promoted = true;
            }
            // The element opens at depth() + 1; it indents one unit less.
            self.break_and_indent(self.depth());
        }
        self.frames.push(Frame {
            class,
            keep_linebreaks: self.options.preserve_linebreaks.contains(name),
            promoted: false,
        });
        self.emit_open_tag(name, attributes);
        self.open_tag = Some(name.to_owned());
    }

    fn emit_open_tag(&mut self, name: &str, attributes: &[Attribute]) {
        self.emitter.emit("<");
        self.emitter.emit(name);
        for attr in attributes {
            self.emitter.emit(" ");
            self.emitter.emit(&attr.name);
            self.emitter.emit("=\"");
            self.emitter
                .emit(&escape_attribute(&attr.value, self.options.escape_mode));
            self.emitter.emit("\"");
        }
        self.emitter.emit(">");
    }

    fn end_element(&mut self, name: &str) {
        let class = self.classifier.classify(name);
        let promoted = self.frames.last().is_some_and(|f| f.promoted);
        let closes_with_break = match class {
            ElementClass::Block => true,
            ElementClass::Compact => promoted,
            ElementClass::Inline | ElementClass::Default => false,
        };
        // At depth 0 (stray end event) no indentation is added.
        if closes_with_break && self.depth() != 0 {
            self.break_and_indent(self.depth() - 1);
        }

        let collapsible = self.open_tag.as_deref() == Some(name)
            && !self.options.close_tags.contains(name);
        if collapsible {
            self.emitter.rewrite_self_close();
        } else {
            self.emitter.emit("</");
            self.emitter.emit(name);
            self.emitter.emit(">");
        }

        self.frames.pop();
        self.open_tag = None;
    }

    fn characters(&mut self, text: &str) {
        let prepared = self.prepare_text(text);
        if prepared.is_empty() {
            return;
        }
        let prepared: String = if self.options.normalize_unicode {
            prepared.nfc().collect()
        } else {
            prepared
        };
        self.open_tag = None;
        self.emitter
            .emit(&escape_text(&prepared, self.options.escape_mode));
    }

    /// CR/LF stripping and edge trimming per the whitespace policy. Line
    /// breaks inside text are never semantically significant here, except
    /// under elements configured to preserve them.
    fn prepare_text(&self, text: &str) -> String {
        if self.keep_linebreaks() {
            return text.to_owned();
        }
        let stripped = strip_linebreaks(text);
        if self.options.preserve_whitespace && self.context().is_flow() {
            stripped
        } else {
            stripped
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .to_owned()
        }
    }

    fn comment(&mut self, text: &str) {
        if self.options.contextual_comments && !self.context().is_flow() {
            self.break_and_indent(self.depth());
        }
        self.emitter.emit("<!--");
        self.emitter.emit(text);
        self.emitter.emit("-->");
        // Bytes emitted inside an open element disqualify its self-close.
        self.open_tag = None;
    }

    fn cdata(&mut self, text: &str) {
        let text = if self.keep_linebreaks() {
            text.to_owned()
        } else {
            strip_linebreaks(text)
        };
        if text.is_empty() {
            return;
        }
        self.open_tag = None;
        self.emitter.emit("<![CDATA[");
        self.emitter.emit(&text);
        self.emitter.emit("]]>");
    }

    fn processing_instruction(&mut self, target: &str, content: &str) {
        let instruction = if content.is_empty() {
            format!("<?{target}?>")
        } else {
            format!("<?{target} {content}?>")
        };
        self.instructions.push(instruction);
    }

    fn xml_declaration(&mut self, decl: &XmlDeclaration) {
        let mut out = String::from("<?xml");
        let fields = [
            ("version", &decl.version),
            ("encoding", &decl.encoding),
            ("standalone", &decl.standalone),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                out.push_str(&format!(" {key}=\"{value}\""));
            }
        }
        out.push_str("?>");
        self.instructions.push(out);
    }

    fn end_document(&mut self) -> Result<(), FormatError> {
        if !self.frames.is_empty() {
            return Err(FormatError::UnbalancedStream {
                depth: self.frames.len(),
            });
        }
        let body = normalize_output(self.emitter.as_str());
        // A self-close rewrite on the document's last element can strand
        // indentation with no following newline; drop it here.
        let body = body.trim_end_matches(|c: char| c.is_ascii_whitespace());
        let mut assembled = String::with_capacity(body.len());
        for instruction in &self.instructions {
            assembled.push_str(instruction);
            assembled.push('\n');
        }
        assembled.push_str(body);
        self.result = Some(assembled);
        Ok(())
    }
}

/// Remove every CR and LF character.
fn strip_linebreaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

//! Output buffer and final normalization pass.
//!
//! The formatter owns exactly one [`StringEmitter`] per document conversion.
//! It builds the body incrementally; [`normalize_output`] runs once over the
//! finished buffer to clean up indentation artifacts.

/// String-based output buffer for in-memory formatting.
///
/// Exclusively owned by one formatting run; exposed read-only once finalized.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append a newline (Unix-style `\n`).
    pub fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Append the indent unit `levels` times.
    pub fn emit_indent(&mut self, unit: &str, levels: usize) {
        for _ in 0..levels {
            self.buffer.push_str(unit);
        }
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Rewrite the most recent tag's trailing `>` into `/>`.
    ///
    /// Valid only while nothing but indentation has been emitted after that
    /// tag, which is exactly the self-close-collapse precondition: the tag's
    /// `>` is the buffer's last. Stranded indentation after the rewrite is
    /// cleaned by [`normalize_output`].
    pub fn rewrite_self_close(&mut self) {
        if let Some(pos) = self.buffer.rfind('>') {
            self.buffer.replace_range(pos..=pos, "/>");
        }
    }

    /// Take the accumulated output.
    pub fn output(self) -> String {
        self.buffer
    }
}

/// Collapse every whitespace run containing a newline down to a single
/// newline plus whatever followed the run's last newline.
///
/// Inserted indentation (a newline followed by indent units) survives.
/// Whitespace stranded before a newline is removed: trailing spaces, blank
/// lines, and the artifacts left around self-close rewrites.
/// Idempotent: a second pass finds nothing left to collapse.
pub fn normalize_output(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if c.is_ascii_whitespace() {
            run.push(c);
        } else {
            flush_run(&mut out, &run);
            run.clear();
            out.push(c);
        }
    }
    flush_run(&mut out, &run);
    out
}

fn flush_run(out: &mut String, run: &str) {
    match run.rfind('\n') {
        Some(last) => {
            out.push('\n');
            out.push_str(&run[last + 1..]);
        }
        None => out.push_str(run),
    }
}

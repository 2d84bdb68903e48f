//! Emission context and output buffer.
//!
//! The `EmitContext` holds the indentation state and output buffer for one
//! rendered block. Every arity block gets its own context so blocks can be
//! rendered independently and concatenated afterwards.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Indentation-aware text buffer.
#[derive(Debug, Default)]
pub struct EmitContext {
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl EmitContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Create a context starting at the given indentation level.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            output: String::with_capacity(1024),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Current indentation level.
    pub fn level(&self) -> usize {
        self.indent
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent * INDENT_WIDTH {
            self.output.push(' ');
        }
    }

    /// Write a string to output.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write each line of a fragment at the current indentation.
    pub fn write_lines(&mut self, lines: &[&str]) {
        for line in lines {
            self.writeln(line);
        }
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `open`, an indented body, then `close`.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(open);
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }

    /// Write a `public:`/`protected:` label one level out from the members.
    pub fn access(&mut self, label: &str) {
        self.dedent();
        self.writeln(label);
        self.indent();
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

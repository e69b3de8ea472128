//! Plain-text rendering of diagnostics.
//!
//! Canonicalization runs with no source text at hand, so labels render as
//! raw spans rather than code snippets:
//!
//! ```text
//! error[E9103]: unsupported structural type: array over a parent domain
//!   --> 12..30: in this declaration
//!   = note: while resolving `var A: [D] Int32`
//! ```

use std::io::{self, Write};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.writer, "{diagnostic}")?;
        for label in &diagnostic.labels {
            writeln!(self.writer, "  --> {:?}: {}", label.span, label.message)?;
        }
        for note in &diagnostic.notes {
            writeln!(self.writer, "  = note: {note}")?;
        }
        self.writer.flush()
    }
}

/// Render a diagnostic to a string, e.g. for logs and test assertions.
pub fn render(diagnostic: &Diagnostic) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new());
    // Writing into a Vec cannot fail.
    let _ = emitter.emit(diagnostic);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[cfg(test)]
mod tests;

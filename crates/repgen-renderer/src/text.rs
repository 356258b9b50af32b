//! Plain-text builder for document rendering.
//!
//! Produces a readable text rendition: underlined headings, indented
//! bullets, pipe-joined table rows, and indented code blocks. Useful for
//! terminal preview and for diffing generated output in tests.

use std::fmt::Write;

use crate::builder::{DocumentBuilder, clamp_row};

/// Plain-text document builder.
#[derive(Debug, Default)]
pub struct TextBuilder {
    output: String,
}

impl TextBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the document and return the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

impl DocumentBuilder for TextBuilder {
    fn emit_heading(&mut self, text: &str, level: u8) {
        let underline = if level == 2 { '=' } else { '-' };
        let rule: String = std::iter::repeat_n(underline, text.chars().count()).collect();
        write!(self.output, "{text}\n{rule}\n\n").unwrap();
    }

    fn emit_paragraph(&mut self, text: &str, _bold: bool) {
        write!(self.output, "{text}\n\n").unwrap();
    }

    fn emit_bullet(&mut self, text: &str, level: u8) {
        let indent = "  ".repeat(usize::from(level));
        writeln!(self.output, "{indent}- {text}").unwrap();
    }

    fn emit_table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        writeln!(self.output, "{}", headers.join(" | ")).unwrap();
        for row in rows {
            writeln!(self.output, "{}", clamp_row(row, headers.len()).join(" | ")).unwrap();
        }
        self.output.push('\n');
    }

    fn emit_code_block(&mut self, text: &str) {
        for line in text.lines() {
            writeln!(self.output, "    {line}").unwrap();
        }
        self.output.push('\n');
    }
}

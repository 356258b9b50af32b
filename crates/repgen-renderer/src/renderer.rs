//! One-pass render driver.
//!
//! Connects the block scanner to a [`DocumentBuilder`]: each block is
//! handed to the builder as soon as it is recognized, so a document
//! streams through without being buffered as a whole.

use repgen_parser::{Block, BlockScanner, content_start};

use crate::builder::DocumentBuilder;

/// Markdown-to-document render driver.
///
/// # Example
///
/// ```
/// use repgen_renderer::{DocumentRenderer, HtmlBuilder};
///
/// let mut builder = HtmlBuilder::new();
/// DocumentRenderer::new().render("## Hello\n\nWorld", &mut builder);
/// assert_eq!(builder.finish(), "<h2>Hello</h2><p>World</p>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRenderer {
    skip_preamble: bool,
}

impl DocumentRenderer {
    /// Create a renderer that converts from the first line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the generated header block (title, metadata table, table of
    /// contents) and start at the first section heading.
    #[must_use]
    pub fn with_preamble_skipping(mut self) -> Self {
        self.skip_preamble = true;
        self
    }

    /// Convert markdown text, feeding each block to `builder` as it is
    /// recognized.
    pub fn render<B: DocumentBuilder>(&self, markdown: &str, builder: &mut B) {
        let lines: Vec<&str> = markdown.lines().collect();
        let start = if self.skip_preamble {
            content_start(&lines)
        } else {
            0
        };
        self.render_lines(&lines, start, builder);
    }

    /// Convert a pre-split line slice starting at line index `start`.
    pub fn render_lines<B: DocumentBuilder>(
        &self,
        lines: &[&str],
        start: usize,
        builder: &mut B,
    ) {
        let mut blocks = 0usize;
        for block in BlockScanner::with_start(lines, start) {
            emit(block, builder);
            blocks += 1;
        }
        tracing::debug!(blocks, "Document rendered");
    }
}

/// Dispatch one block to the builder.
fn emit<B: DocumentBuilder>(block: Block, builder: &mut B) {
    match block {
        Block::Heading { level, text } => builder.emit_heading(&text, level),
        Block::Paragraph { text, bold } => builder.emit_paragraph(&text, bold),
        Block::Bullet { text, level } => builder.emit_bullet(&text, level),
        Block::Table { headers, rows } => builder.emit_table(&headers, &rows),
        Block::CodeBlock { text } => builder.emit_code_block(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlBuilder;
    use pretty_assertions::assert_eq;

    /// Records emitted blocks for assertions on order and content.
    #[derive(Default)]
    struct RecordingBuilder {
        events: Vec<String>,
    }

    impl DocumentBuilder for RecordingBuilder {
        fn emit_heading(&mut self, text: &str, level: u8) {
            self.events.push(format!("heading[{level}]:{text}"));
        }

        fn emit_paragraph(&mut self, text: &str, bold: bool) {
            self.events.push(format!("paragraph[bold={bold}]:{text}"));
        }

        fn emit_bullet(&mut self, text: &str, level: u8) {
            self.events.push(format!("bullet[{level}]:{text}"));
        }

        fn emit_table(&mut self, headers: &[String], rows: &[Vec<String>]) {
            self.events
                .push(format!("table[{}x{}]", headers.len(), rows.len()));
        }

        fn emit_code_block(&mut self, text: &str) {
            self.events.push(format!("code:{text}"));
        }
    }

    fn record(renderer: DocumentRenderer, markdown: &str) -> Vec<String> {
        let mut builder = RecordingBuilder::default();
        renderer.render(markdown, &mut builder);
        builder.events
    }

    #[test]
    fn test_blocks_arrive_in_source_order() {
        let markdown = "## Scope\n\ntext\n\n- item\n\n| A |\n| --- |\n| 1 |\n\n```\ncode\n```";
        let events = record(DocumentRenderer::new(), markdown);
        assert_eq!(
            events,
            vec![
                "heading[2]:Scope".to_owned(),
                "paragraph[bold=false]:text".to_owned(),
                "bullet[0]:item".to_owned(),
                "table[1x1]".to_owned(),
                "code:code".to_owned(),
            ]
        );
    }

    #[test]
    fn test_preamble_skipped_when_enabled() {
        let markdown = "\
# Title

| Version | 1.0 |
| --- | --- |
| Status | Draft |

## Table of Contents

- [Scope](#scope)

## Scope

Body text.";
        let events = record(DocumentRenderer::new().with_preamble_skipping(), markdown);
        assert_eq!(
            events,
            vec![
                "heading[2]:Scope".to_owned(),
                "paragraph[bold=false]:Body text.".to_owned(),
            ]
        );
    }

    #[test]
    fn test_preamble_kept_by_default() {
        let markdown = "# Title\n\n## Scope\n\nBody.";
        let events = record(DocumentRenderer::new(), markdown);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], "paragraph[bold=false]:# Title");
    }

    #[test]
    fn test_render_lines_with_offset() {
        let lines = ["ignored", "## Kept"];
        let mut builder = RecordingBuilder::default();
        DocumentRenderer::new().render_lines(&lines, 1, &mut builder);
        assert_eq!(builder.events, vec!["heading[2]:Kept".to_owned()]);
    }

    #[test]
    fn test_empty_document_emits_nothing() {
        assert_eq!(record(DocumentRenderer::new(), ""), Vec::<String>::new());
    }

    #[test]
    fn test_html_end_to_end() {
        let markdown = "## Findings\n\n**Summary**\n\n- one\n  - two";
        let mut builder = HtmlBuilder::new();
        DocumentRenderer::new().render(markdown, &mut builder);
        let expected = concat!(
            "<h2>Findings</h2><p><strong>Summary</strong></p>",
            "<ul><li>one</li><ul><li>two</li></ul></ul>",
        );
        assert_eq!(builder.finish(), expected);
    }
}

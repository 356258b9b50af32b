//! HTML builder for document rendering.
//!
//! Produces a semantic HTML5 fragment suitable for embedding in a page
//! shell: headings, paragraphs, nested lists, tables with header rows,
//! and `<pre><code>` code blocks. All text is HTML-escaped.

use std::fmt::Write;

use crate::builder::{DocumentBuilder, clamp_row};

/// HTML document builder.
///
/// Bullets arrive as flat items with a nesting depth, so the builder
/// tracks open `<ul>` elements and closes them when a non-bullet block
/// (or the end of the document) follows.
#[derive(Debug)]
pub struct HtmlBuilder {
    output: String,
    list_depth: usize,
}

impl HtmlBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            list_depth: 0,
        }
    }

    /// Finish the document and return the rendered HTML.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.set_list_depth(0);
        self.output
    }

    /// Open or close `<ul>` elements until `depth` lists are open.
    fn set_list_depth(&mut self, depth: usize) {
        while self.list_depth > depth {
            self.output.push_str("</ul>");
            self.list_depth -= 1;
        }
        while self.list_depth < depth {
            self.output.push_str("<ul>");
            self.list_depth += 1;
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for HtmlBuilder {
    fn emit_heading(&mut self, text: &str, level: u8) {
        self.set_list_depth(0);
        write!(
            self.output,
            "<h{level}>{}</h{level}>",
            html_escape::encode_text(text)
        )
        .unwrap();
    }

    fn emit_paragraph(&mut self, text: &str, bold: bool) {
        self.set_list_depth(0);
        let escaped = html_escape::encode_text(text);
        if bold {
            write!(self.output, "<p><strong>{escaped}</strong></p>").unwrap();
        } else {
            write!(self.output, "<p>{escaped}</p>").unwrap();
        }
    }

    fn emit_bullet(&mut self, text: &str, level: u8) {
        self.set_list_depth(usize::from(level) + 1);
        write!(self.output, "<li>{}</li>", html_escape::encode_text(text)).unwrap();
    }

    fn emit_table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        self.set_list_depth(0);
        self.output.push_str("<table><thead><tr>");
        for header in headers {
            write!(self.output, "<th>{}</th>", html_escape::encode_text(header)).unwrap();
        }
        self.output.push_str("</tr></thead><tbody>");
        for row in rows {
            self.output.push_str("<tr>");
            for cell in clamp_row(row, headers.len()) {
                write!(self.output, "<td>{}</td>", html_escape::encode_text(cell)).unwrap();
            }
            self.output.push_str("</tr>");
        }
        self.output.push_str("</tbody></table>");
    }

    fn emit_code_block(&mut self, text: &str) {
        self.set_list_depth(0);
        write!(
            self.output,
            "<pre><code>{}</code></pre>",
            html_escape::encode_text(text)
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_heading() {
        let mut builder = HtmlBuilder::new();
        builder.emit_heading("Scope", 2);
        assert_eq!(builder.finish(), "<h2>Scope</h2>");
    }

    #[test]
    fn test_paragraph_escapes_text() {
        let mut builder = HtmlBuilder::new();
        builder.emit_paragraph("a < b & c", false);
        assert_eq!(builder.finish(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_bold_paragraph() {
        let mut builder = HtmlBuilder::new();
        builder.emit_paragraph("Important", true);
        assert_eq!(builder.finish(), "<p><strong>Important</strong></p>");
    }

    #[test]
    fn test_bullets_grouped_into_list() {
        let mut builder = HtmlBuilder::new();
        builder.emit_bullet("one", 0);
        builder.emit_bullet("two", 0);
        builder.emit_paragraph("after", false);
        assert_eq!(
            builder.finish(),
            "<ul><li>one</li><li>two</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_nested_bullets() {
        let mut builder = HtmlBuilder::new();
        builder.emit_bullet("top", 0);
        builder.emit_bullet("nested", 1);
        builder.emit_bullet("top again", 0);
        assert_eq!(
            builder.finish(),
            "<ul><li>top</li><ul><li>nested</li></ul><li>top again</li></ul>"
        );
    }

    #[test]
    fn test_trailing_list_closed_on_finish() {
        let mut builder = HtmlBuilder::new();
        builder.emit_bullet("last", 1);
        assert_eq!(builder.finish(), "<ul><ul><li>last</li></ul></ul>");
    }

    #[test]
    fn test_table_structure() {
        let mut builder = HtmlBuilder::new();
        builder.emit_table(
            &cells(&["A", "B"]),
            &[cells(&["1", "2"]), cells(&["3", "4"])],
        );
        let expected = concat!(
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>",
            "<tbody><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></tbody></table>",
        );
        assert_eq!(builder.finish(), expected);
    }

    #[test]
    fn test_table_excess_cells_dropped() {
        let mut builder = HtmlBuilder::new();
        builder.emit_table(&cells(&["A", "B"]), &[cells(&["1", "2", "3"])]);
        let html = builder.finish();
        assert!(html.contains("<tr><td>1</td><td>2</td></tr>"));
        assert!(!html.contains("<td>3</td>"));
    }

    #[test]
    fn test_table_missing_cells_left_absent() {
        let mut builder = HtmlBuilder::new();
        builder.emit_table(&cells(&["A", "B"]), &[cells(&["only"])]);
        assert!(builder.finish().contains("<tr><td>only</td></tr>"));
    }

    #[test]
    fn test_code_block() {
        let mut builder = HtmlBuilder::new();
        builder.emit_code_block("let x = a < b;");
        assert_eq!(
            builder.finish(),
            "<pre><code>let x = a &lt; b;</code></pre>"
        );
    }
}

//! Structural blocks recognized by the scanner.

/// One structural unit of a markdown source document.
///
/// Blocks own their text; a block created by the scanner carries no
/// reference back into the source lines and can outlive them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Section heading. Only levels 2 and 3 are produced by the scanner;
    /// other heading depths fall through to the paragraph rule.
    Heading {
        /// Heading depth (2 or 3).
        level: u8,
        /// Heading text with markers stripped.
        text: String,
    },
    /// Body paragraph.
    Paragraph {
        /// Paragraph text with emphasis markers deleted.
        text: String,
        /// Whether the whole line was wrapped in `**`.
        bold: bool,
    },
    /// List item.
    Bullet {
        /// Item text with the list marker and emphasis markers removed.
        text: String,
        /// Nesting depth: 0 for top-level items, 1 for indented items.
        level: u8,
    },
    /// Pipe-delimited table.
    Table {
        /// Cells of the header row.
        headers: Vec<String>,
        /// Cells of each data row. Row widths are not validated against
        /// the header; builders handle the mismatch at emission.
        rows: Vec<Vec<String>>,
    },
    /// Fenced code block content, verbatim, without the fence lines.
    CodeBlock {
        /// Code text with interior newlines preserved.
        text: String,
    },
}

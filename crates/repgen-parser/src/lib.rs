//! Line-oriented markdown block scanner.
//!
//! This crate recognizes the lightweight markdown subset used by generated
//! requirement documents and turns it into a stream of structural
//! [`Block`] values: headings, paragraphs, bullets, pipe tables, and
//! fenced code blocks. Presentation-only lines (blanks, horizontal rules,
//! table-of-contents links) are skipped.
//!
//! The scanner is a single forward pass with an explicit cursor and a
//! fixed one-line lookahead for table detection. It has no failure path:
//! every line matches a rule or the paragraph fallback, so scanning
//! always terminates with some block sequence.
//!
//! # Example
//!
//! ```
//! use repgen_parser::{Block, BlockScanner};
//!
//! let lines = ["## Requirements", "- shall parse", "- shall emit"];
//! let blocks: Vec<Block> = BlockScanner::new(&lines).collect();
//! assert_eq!(blocks.len(), 3);
//! ```

mod block;
mod scanner;

pub use block::Block;
pub use scanner::{BlockScanner, content_start};

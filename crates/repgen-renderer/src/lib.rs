//! Trait-based document rendering with pluggable backends.
//!
//! This crate turns scanned markdown blocks into concrete output
//! documents. The [`DocumentRenderer`] drives a single streaming pass
//! over the source, handing each recognized block to a
//! [`DocumentBuilder`] implementation:
//!
//! - [`HtmlBuilder`]: semantic HTML5 fragment
//! - [`TextBuilder`]: plain-text rendition
//!
//! # Example
//!
//! ```
//! use repgen_renderer::{DocumentRenderer, HtmlBuilder};
//!
//! let markdown = "## Scope\n\n- first\n- second";
//! let mut builder = HtmlBuilder::new();
//! DocumentRenderer::new()
//!     .with_preamble_skipping()
//!     .render(markdown, &mut builder);
//! let html = builder.finish();
//! assert!(html.starts_with("<h2>Scope</h2>"));
//! ```

mod builder;
mod html;
mod renderer;
mod text;

pub use builder::{DocumentBuilder, clamp_row};
pub use html::HtmlBuilder;
pub use renderer::DocumentRenderer;
pub use text::TextBuilder;

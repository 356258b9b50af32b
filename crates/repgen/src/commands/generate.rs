//! `repgen generate` command implementation.

use std::path::PathBuf;

use clap::Args;
use repgen_config::{CliSettings, Config, DocumentEntry, OutputFormat};
use repgen_renderer::{DocumentRenderer, HtmlBuilder, TextBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for generated documents (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format: html or text (overrides config).
    #[arg(short, long)]
    format: Option<String>,

    /// Path to configuration file (default: auto-discover repgen.toml).
    #[arg(short, long, env = "REPGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (show per-document conversion logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// Documents are processed strictly in manifest order. A missing
    /// source file or a failed conversion is reported and the loop
    /// continues with the next document; the command only fails outright
    /// on configuration errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let format = self
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(CliError::Validation)?;
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            output_dir: self.output_dir.clone(),
            format,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if config.documents().is_empty() {
            output.warning("No documents configured; nothing to generate");
            return Ok(());
        }

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", config.output_resolved.dir.display()));

        std::fs::create_dir_all(&config.output_resolved.dir)?;

        let mut generated = 0usize;
        let mut errors: Vec<String> = Vec::new();

        for doc in config.documents() {
            let source = config.source_path(doc);
            if !source.exists() {
                output.warning(&format!("Skipping {} (not found)", doc.source));
                errors.push(doc.source.clone());
                continue;
            }

            match generate_document(&config, doc) {
                Ok(path) => {
                    output.success(&format!("{} -> {}", doc.title, path.display()));
                    generated += 1;
                }
                Err(err) => {
                    output.error(&format!("Failed to generate {}: {err}", doc.source));
                    errors.push(doc.source.clone());
                }
            }
        }

        output.separator();
        output.info(&format!("Generated: {generated} document(s)"));
        if !errors.is_empty() {
            output.warning(&format!("Errors: {} - {}", errors.len(), errors.join(", ")));
        }

        Ok(())
    }
}

/// Convert one document and write it to the output directory.
fn generate_document(config: &Config, doc: &DocumentEntry) -> Result<PathBuf, CliError> {
    let source = config.source_path(doc);
    let markdown = std::fs::read_to_string(&source)?;
    tracing::info!(source = %source.display(), bytes = markdown.len(), "Converting document");

    let rendered = render_markdown(&markdown, config.output_resolved.format);

    let out_path = config.output_path(doc);
    std::fs::write(&out_path, rendered)?;
    Ok(out_path)
}

/// Render markdown into the configured output format, skipping the
/// generated title/metadata/TOC preamble.
fn render_markdown(markdown: &str, format: OutputFormat) -> String {
    let renderer = DocumentRenderer::new().with_preamble_skipping();
    match format {
        OutputFormat::Html => {
            let mut builder = HtmlBuilder::new();
            renderer.render(markdown, &mut builder);
            builder.finish()
        }
        OutputFormat::Text => {
            let mut builder = TextBuilder::new();
            renderer.render(markdown, &mut builder);
            builder.finish()
        }
    }
}

//! `repgen list` command implementation.

use std::path::PathBuf;

use clap::Args;
use repgen_config::{Config, DocumentEntry};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover repgen.toml).
    #[arg(short, long, env = "REPGEN_CONFIG")]
    config: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        if config.documents().is_empty() {
            output.warning("No documents configured");
            return Ok(());
        }

        output.highlight(&format!("Documents ({})", config.documents().len()));
        for doc in config.documents() {
            let status = if config.source_path(doc).exists() {
                "ok     "
            } else {
                "missing"
            };
            output.info(&format!("  [{status}] {}", describe(doc)));
        }

        Ok(())
    }
}

/// One-line description of a manifest entry.
fn describe(doc: &DocumentEntry) -> String {
    match doc.subtitle.as_deref() {
        Some(subtitle) => format!("{} - {} ({subtitle})", doc.source, doc.title),
        None => format!("{} - {}", doc.source, doc.title),
    }
}

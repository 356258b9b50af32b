//! Configuration management for repgen.
//!
//! Parses `repgen.toml` manifests with serde and provides auto-discovery
//! of config files in parent directories. The manifest lists the markdown
//! documents to convert together with the source and output directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Path Expansion
//!
//! Directory values support `~` and environment variable expansion via
//! shellexpand:
//!
//! - `docs.source_dir`
//! - `output.dir`

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override output format.
    pub format: Option<OutputFormat>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "repgen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation source configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Documents to generate, in manifest order.
    #[serde(rename = "document")]
    documents: Vec<DocumentEntry>,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// One document in the generation manifest.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentEntry {
    /// Markdown filename, relative to the source directory.
    pub source: String,
    /// Document title, used for reporting.
    pub title: String,
    /// Optional subtitle.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Output filename stem. Defaults to the source filename stem.
    #[serde(default)]
    pub output: Option<String>,
}

impl DocumentEntry {
    /// Output filename stem for this document.
    #[must_use]
    pub fn output_stem(&self) -> String {
        match &self.output {
            Some(stem) => stem.clone(),
            None => Path::new(&self.source)
                .file_stem()
                .map_or_else(|| self.source.clone(), |s| s.to_string_lossy().into_owned()),
        }
    }
}

/// Output document format.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Semantic HTML5 fragment.
    #[default]
    Html,
    /// Plain-text rendition.
    Text,
}

impl OutputFormat {
    /// File extension for generated documents.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Raw source configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    format: Option<OutputFormat>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory generated documents are written to.
    pub dir: PathBuf,
    /// Output document format.
    pub format: OutputFormat,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`REPGEN_DOCS`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Expand `~` and environment variable references in a path value.
fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `repgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(format) = settings.format {
            self.output_resolved.format = format;
        }
    }

    /// Documents to generate, in manifest order.
    #[must_use]
    pub fn documents(&self) -> &[DocumentEntry] {
        &self.documents
    }

    /// Full path of a document's markdown source.
    #[must_use]
    pub fn source_path(&self, doc: &DocumentEntry) -> PathBuf {
        self.docs_resolved.source_dir.join(&doc.source)
    }

    /// Full path a generated document is written to, with the extension
    /// of the configured output format.
    #[must_use]
    pub fn output_path(&self, doc: &DocumentEntry) -> PathBuf {
        let filename = format!(
            "{}.{}",
            doc.output_stem(),
            self.output_resolved.format.extension()
        );
        self.output_resolved.dir.join(filename)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            output: OutputConfigRaw::default(),
            documents: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            output_resolved: OutputConfig {
                dir: base.join("build"),
                format: OutputFormat::default(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that every manifest entry carries the fields the batch loop
    /// relies on. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, doc) in self.documents.iter().enumerate() {
            require_non_empty(&doc.source, &format!("document[{i}].source"))?;
            require_non_empty(&doc.title, &format!("document[{i}].title"))?;
            if let Some(output) = &doc.output {
                require_non_empty(output, &format!("document[{i}].output"))?;
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Expands `~` and environment references before resolution.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let source_dir = match self.docs.source_dir.as_deref() {
            Some(raw) => PathBuf::from(expand_path(raw, "docs.source_dir")?),
            None => PathBuf::from("docs"),
        };
        let output_dir = match self.output.dir.as_deref() {
            Some(raw) => PathBuf::from(expand_path(raw, "output.dir")?),
            None => PathBuf::from("build"),
        };

        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
        self.output_resolved = OutputConfig {
            dir: config_dir.join(output_dir),
            format: self.output.format.unwrap_or_default(),
        };

        Ok(())
    }
}

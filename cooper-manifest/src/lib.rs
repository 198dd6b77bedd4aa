// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod export;
mod file;
mod target;
mod validate;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use export::ExportType;
pub use file::CooperToml;
use serde::Deserialize;
pub use target::Target;

/// Root schema for cooper.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generator settings and targets
    pub generator: GeneratorConfig,
}

/// The `[generator]` table of cooper.toml
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Root for resolving relative target paths; defaults to the working
    /// directory when omitted
    pub base_dir: Option<PathBuf>,

    /// Extension (including the leading dot) for generated barrel files
    /// and for locating nested `index<extension>` modules
    pub extension: String,

    /// Fallback export strategy when a target does not specify its own
    #[serde(default)]
    pub export_type: Option<ExportType>,

    /// Directories to process, in order
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Manifest {
    /// Resolve the export strategy for one target:
    /// target override, then the generator-wide setting, then named.
    pub fn export_type_for(&self, target: &Target) -> ExportType {
        target
            .export_type()
            .or(self.generator.export_type)
            .unwrap_or(ExportType::Named)
    }

    /// Validate the manifest after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let extension = &self.generator.extension;
        if extension.is_empty() {
            let message = "extension must not be empty";
            return Err(match validate::find_span(src, "extension") {
                Some(span) => Error::validation_at(message, src, filename, span),
                None => Error::validation(message, src, filename),
            });
        }
        if !extension.starts_with('.') {
            let message = format!("extension '{extension}' must start with a dot");
            return Err(match validate::find_quoted_span(src, extension) {
                Some(span) => Error::validation_at(message, src, filename, span),
                None => Error::validation(message, src, filename),
            });
        }

        for target in &self.generator.targets {
            let path = target.path();
            if path.is_empty() {
                return Err(Error::validation("target path must not be empty", src, filename));
            }
            if Path::new(path).is_absolute() {
                let message = format!(
                    "target path '{path}' must be relative to base_dir, not absolute"
                );
                return Err(match validate::find_quoted_span(src, path) {
                    Some(span) => Error::validation_at(message, src, filename, span),
                    None => Error::validation(message, src, filename),
                });
            }
        }

        Ok(())
    }
}

/// Parse a cooper.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a cooper.toml from a string (uses "cooper.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, "cooper.toml")
}

/// Parse a cooper.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    manifest.validate(content, filename)?;
    Ok(manifest)
}

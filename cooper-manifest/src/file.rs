use std::path::{Path, PathBuf};

use crate::{Manifest, Result, parse_str_with_filename};

/// Represents a cooper.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct CooperToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CooperToml {
    /// Open and parse a cooper.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Starter manifest content for `cooper init`.
    pub fn starter(extension: &str) -> String {
        format!(
            r#"[generator]
extension = "{extension}"
# base_dir = "src"
# export_type = "named"
targets = [
    # "components",
    # {{ path = "hooks", export_type = "default" }},
]
"#
        )
    }
}

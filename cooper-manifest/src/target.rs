//! Target directories to scan and barrel-generate.

use serde::Deserialize;

use crate::ExportType;

/// One configured directory, either a bare path or a path with its own
/// export strategy overriding the generator-wide one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// `"components"` — uses the generator-wide export type
    Path(String),
    /// `{ path = "hooks", export_type = "default" }`
    Detailed {
        path: String,
        #[serde(default)]
        export_type: Option<ExportType>,
    },
}

impl Target {
    /// Directory path, relative to the generator's base directory.
    pub fn path(&self) -> &str {
        match self {
            Target::Path(path) => path,
            Target::Detailed { path, .. } => path,
        }
    }

    /// Per-target export strategy override, if any.
    pub fn export_type(&self) -> Option<ExportType> {
        match self {
            Target::Path(_) => None,
            Target::Detailed { export_type, .. } => *export_type,
        }
    }
}

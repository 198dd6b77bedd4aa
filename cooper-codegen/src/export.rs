//! Export statement templates and the textual default-export detection.

use std::path::{Path, PathBuf};

use cooper_core::module_stem;
use cooper_manifest::ExportType;

use crate::TargetError;

/// Line prefix the detection heuristic looks for.
///
/// This is a textual scan, not a module-system query: a module that
/// reformats `export default` across multiple lines, or mentions it at the
/// start of a commented line, will be misdetected.
const DEFAULT_EXPORT_PREFIX: &str = "export default";

/// `export { default as <stem> } from './<stem>';`
pub fn default_export(stem: &str) -> String {
    format!("export {{ default as {stem} }} from './{stem}';")
}

/// `export * from './<stem>';`
pub fn named_export(stem: &str) -> String {
    format!("export * from './{stem}';")
}

/// Compute the export statement for every entry, in listing order.
pub fn render_statements(
    dir: &Path,
    entries: &[String],
    export_type: ExportType,
    extension: &str,
) -> Result<Vec<String>, TargetError> {
    entries
        .iter()
        .map(|entry| statement_for(dir, entry, export_type, extension))
        .collect()
}

fn statement_for(
    dir: &Path,
    entry: &str,
    export_type: ExportType,
    extension: &str,
) -> Result<String, TargetError> {
    let stem = module_stem(entry);
    match export_type {
        ExportType::Named => Ok(named_export(stem)),
        ExportType::Default => Ok(default_export(stem)),
        ExportType::Detect => {
            if has_default_export(dir, entry, extension)? {
                Ok(default_export(stem))
            } else {
                Ok(named_export(stem))
            }
        }
    }
}

/// Detect the export form of an entry by reading its module file.
///
/// A directory entry is represented by the first nested `index<extension>`
/// file in listing order; a missing one fails with a dedicated error
/// instead of a generic read failure.
fn has_default_export(dir: &Path, entry: &str, extension: &str) -> Result<bool, TargetError> {
    let entry_path = dir.join(entry);
    let metadata =
        std::fs::symlink_metadata(&entry_path).map_err(|source| TargetError::Detection {
            path: entry_path.clone(),
            source,
        })?;

    let module_path = if metadata.is_dir() {
        find_nested_index(&entry_path, extension)?
    } else {
        entry_path
    };

    let content = std::fs::read_to_string(&module_path).map_err(|source| {
        TargetError::Detection {
            path: module_path.clone(),
            source,
        }
    })?;

    Ok(content
        .lines()
        .any(|line| line.starts_with(DEFAULT_EXPORT_PREFIX)))
}

fn find_nested_index(dir: &Path, extension: &str) -> Result<PathBuf, TargetError> {
    let marker = format!("index{extension}");
    let detection = |source| TargetError::Detection {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(detection)? {
        let entry = entry.map_err(detection)?;
        if entry.file_name().to_string_lossy().contains(&marker) {
            return Ok(entry.path());
        }
    }

    Err(TargetError::NoIndexFile {
        path: dir.to_path_buf(),
        extension: extension.to_string(),
    })
}

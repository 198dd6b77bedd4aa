//! Target directory listing.

use std::path::Path;

use crate::TargetError;

/// Entries whose name contains this substring anywhere are dropped from
/// listings. This deliberately also drops names like `foo-index-helper.js`,
/// not only literal index modules; existing configurations rely on the
/// substring match, so it must not be narrowed to exact matches.
const INDEX_MARKER: &str = "index";

/// List the immediate children of `dir` as bare names, in directory order.
///
/// Any entry whose name contains `index` is excluded, which keeps a
/// previously generated barrel out of its own listing.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, TargetError> {
    let listing = |source| TargetError::Listing {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(listing)? {
        let entry = entry.map_err(listing)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(INDEX_MARKER) {
            continue;
        }
        entries.push(name);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_bare_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Button.tsx"), "").unwrap();
        fs::create_dir(temp.path().join("widgets")).unwrap();

        let mut entries = list_entries(temp.path()).unwrap();
        entries.sort();
        assert_eq!(entries, vec!["Button.tsx", "widgets"]);
    }

    #[test]
    fn test_excludes_index_substring() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.ts"), "").unwrap();
        fs::write(temp.path().join("foo-index-helper.js"), "").unwrap();
        fs::write(temp.path().join("utils.js"), "").unwrap();

        let entries = list_entries(temp.path()).unwrap();
        assert_eq!(entries, vec!["utils.js"]);
    }

    #[test]
    fn test_missing_directory_is_listing_error() {
        let temp = TempDir::new().unwrap();
        let err = list_entries(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, TargetError::Listing { .. }));
    }
}

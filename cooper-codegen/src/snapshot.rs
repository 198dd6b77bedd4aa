//! Change-detection cache of last-processed directory listings.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Maps an absolute directory path to the last listing processed for it.
///
/// Owned by the [`Generator`](crate::Generator); never persisted to disk.
/// A cached sequence exactly equals the listing from the run that stored
/// it, order included.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: IndexMap<PathBuf, Vec<String>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order- and length-sensitive comparison against the cached listing.
    ///
    /// A directory never seen before compares against the empty sequence,
    /// so an empty first listing counts as unchanged.
    pub fn matches(&self, dir: &Path, listing: &[String]) -> bool {
        match self.entries.get(dir) {
            Some(cached) => cached.as_slice() == listing,
            None => listing.is_empty(),
        }
    }

    /// Store the listing for `dir`, replacing any previous snapshot.
    pub fn store(&mut self, dir: PathBuf, listing: Vec<String>) {
        debug_assert!(dir.is_absolute());
        self.entries.insert(dir, listing);
    }

    /// Last stored listing for `dir`, if any.
    pub fn get(&self, dir: &Path) -> Option<&[String]> {
        self.entries.get(dir).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_unseen_directory_matches_only_empty_listing() {
        let cache = SnapshotCache::new();
        assert!(cache.matches(Path::new("/src/components"), &[]));
        assert!(!cache.matches(Path::new("/src/components"), &listing(&["a.ts"])));
    }

    #[test]
    fn test_matches_is_order_sensitive() {
        let mut cache = SnapshotCache::new();
        cache.store(PathBuf::from("/src/components"), listing(&["a.ts", "b.ts"]));

        assert!(cache.matches(Path::new("/src/components"), &listing(&["a.ts", "b.ts"])));
        assert!(!cache.matches(Path::new("/src/components"), &listing(&["b.ts", "a.ts"])));
    }

    #[test]
    fn test_matches_is_length_sensitive() {
        let mut cache = SnapshotCache::new();
        cache.store(PathBuf::from("/src/components"), listing(&["a.ts"]));

        assert!(!cache.matches(Path::new("/src/components"), &listing(&["a.ts", "b.ts"])));
        assert!(!cache.matches(Path::new("/src/components"), &[]));
    }

    #[test]
    fn test_store_replaces_previous_snapshot() {
        let mut cache = SnapshotCache::new();
        cache.store(PathBuf::from("/src/hooks"), listing(&["a.ts"]));
        cache.store(PathBuf::from("/src/hooks"), listing(&["b.ts"]));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Path::new("/src/hooks")).unwrap(), ["b.ts"]);
    }
}

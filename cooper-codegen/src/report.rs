//! Aggregated result of one generation run.

use std::path::{Path, PathBuf};

use crate::TargetError;

/// Result of one run: one outcome per configured target, in manifest order.
///
/// A failed target never aborts the run; its error lands here and the
/// remaining targets are still processed.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl GenerateReport {
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TargetStatus::Written { .. }))
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, TargetStatus::Unchanged))
            .count()
    }

    /// Failed targets with their errors, in manifest order.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &TargetError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            TargetStatus::Failed(err) => Some((o.directory.as_path(), err)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Outcome for a single target directory.
#[derive(Debug)]
pub struct TargetOutcome {
    /// Absolute target directory path.
    pub directory: PathBuf,
    pub status: TargetStatus,
}

/// What happened to one target during a run.
#[derive(Debug)]
pub enum TargetStatus {
    /// Listing changed; the barrel file was rewritten.
    Written {
        /// Number of re-exported entries.
        entries: usize,
    },
    /// Listing matched the snapshot; nothing was written.
    Unchanged,
    /// Listing, detection, or write failed; the target was abandoned for
    /// this run.
    Failed(TargetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = GenerateReport {
            outcomes: vec![
                TargetOutcome {
                    directory: PathBuf::from("/src/a"),
                    status: TargetStatus::Written { entries: 2 },
                },
                TargetOutcome {
                    directory: PathBuf::from("/src/b"),
                    status: TargetStatus::Unchanged,
                },
                TargetOutcome {
                    directory: PathBuf::from("/src/c"),
                    status: TargetStatus::Failed(TargetError::NoIndexFile {
                        path: PathBuf::from("/src/c/widgets"),
                        extension: ".ts".to_string(),
                    }),
                },
            ],
        };

        assert_eq!(report.written_count(), 1);
        assert_eq!(report.unchanged_count(), 1);
        assert!(report.has_failures());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Path::new("/src/c"));
    }
}

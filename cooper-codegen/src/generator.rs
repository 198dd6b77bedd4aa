//! The barrel generator.

use std::path::{Path, PathBuf};

use cooper_core::GeneratedFile;
use cooper_manifest::{ExportType, Manifest};
use eyre::Result;

use crate::{
    BarrelFile, GenerateReport, SnapshotCache, TargetError, TargetOutcome, TargetStatus,
    export::render_statements, scan::list_entries,
};

/// Generates barrel files for the manifest's target directories.
///
/// The generator owns the [`SnapshotCache`] used to skip targets whose
/// listing did not change between runs; keep one generator alive across
/// runs to benefit from it.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    cache: SnapshotCache,
}

/// A rendered barrel for preview output.
#[derive(Debug)]
pub struct PreviewFile {
    /// Absolute path the barrel would be written to.
    pub path: String,
    /// Barrel content.
    pub content: String,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            cache: SnapshotCache::new(),
        }
    }

    /// The change-detection cache, keyed by absolute target directory.
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Process every target once, writing changed barrels to disk.
    ///
    /// Targets are processed sequentially in manifest order, each
    /// independently: a failure is recorded in the report and the run
    /// moves on to the next target.
    pub fn generate(&mut self) -> Result<GenerateReport> {
        let manifest = self.manifest;
        let base = self.resolve_base()?;
        let extension = manifest.generator.extension.as_str();

        let mut outcomes = Vec::with_capacity(manifest.generator.targets.len());
        for target in &manifest.generator.targets {
            let directory = base.join(target.path());
            let export_type = manifest.export_type_for(target);
            let status = self.process_target(&directory, export_type, extension);
            outcomes.push(TargetOutcome { directory, status });
        }

        Ok(GenerateReport { outcomes })
    }

    /// Render every target's barrel without writing anything or touching
    /// the snapshot cache.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let manifest = self.manifest;
        let base = self.resolve_base()?;
        let extension = manifest.generator.extension.as_str();

        let mut files = Vec::with_capacity(manifest.generator.targets.len());
        for target in &manifest.generator.targets {
            let directory = base.join(target.path());
            let export_type = manifest.export_type_for(target);

            let entries = list_entries(&directory)?;
            let statements = render_statements(&directory, &entries, export_type, extension)?;
            let barrel = BarrelFile::new(extension, statements);

            files.push(PreviewFile {
                path: barrel.path(&directory).display().to_string(),
                content: barrel.render(),
            });
        }

        Ok(files)
    }

    fn process_target(
        &mut self,
        directory: &Path,
        export_type: ExportType,
        extension: &str,
    ) -> TargetStatus {
        let entries = match list_entries(directory) {
            Ok(entries) => entries,
            Err(err) => return TargetStatus::Failed(err),
        };

        if self.cache.matches(directory, &entries) {
            return TargetStatus::Unchanged;
        }

        // Snapshot is updated before rendering: a failed target stays
        // skipped until its listing changes.
        self.cache.store(directory.to_path_buf(), entries.clone());

        let statements = match render_statements(directory, &entries, export_type, extension) {
            Ok(statements) => statements,
            Err(err) => return TargetStatus::Failed(err),
        };

        let barrel = BarrelFile::new(extension, statements);
        match barrel.write(directory) {
            Ok(_) => TargetStatus::Written {
                entries: entries.len(),
            },
            Err(source) => TargetStatus::Failed(TargetError::Write {
                path: barrel.path(directory),
                source,
            }),
        }
    }

    /// Absolute root for resolving target paths: the manifest's base_dir
    /// (itself resolved against the working directory when relative), or
    /// the working directory.
    fn resolve_base(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.manifest.generator.base_dir {
            Some(base) if base.is_absolute() => base.clone(),
            Some(base) => cwd.join(base),
            None => cwd,
        })
    }
}

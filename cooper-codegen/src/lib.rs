//! Barrel file generation for the Cooper barrel generator.
//!
//! This crate scans configured target directories, detects which listings
//! changed since the last run, and rewrites each changed directory's barrel
//! file (`index<extension>`) from its current children.
//!
//! # Usage
//!
//! This crate is used internally by the `cooper` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use cooper_codegen::Generator;
//! use cooper_manifest::CooperToml;
//!
//! let cooper_toml = CooperToml::open("cooper.toml")?;
//! let mut generator = Generator::new(cooper_toml.manifest());
//!
//! // Preview barrels without writing
//! let files = generator.preview()?;
//!
//! // Generate barrels to disk
//! let report = generator.generate()?;
//! ```

mod barrel;
mod error;
mod export;
mod generator;
mod report;
mod scan;
mod snapshot;

pub use barrel::BarrelFile;
pub use error::TargetError;
pub use export::{default_export, named_export, render_statements};
pub use generator::{Generator, PreviewFile};
pub use report::{GenerateReport, TargetOutcome, TargetStatus};
pub use scan::list_entries;
pub use snapshot::SnapshotCache;

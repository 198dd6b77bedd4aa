//! Core utilities for the Cooper barrel generator.
//!
//! This crate provides the file-writing primitives and small string
//! helpers shared by the rest of the Cooper workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::module_stem;

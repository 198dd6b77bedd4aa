use std::{io, path::PathBuf};

use thiserror::Error;

/// Error aborting a single target; never fatal to the overall run.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("failed to list directory '{}'", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read module '{}'", path.display())]
    Detection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no index{extension} module found in '{}'", path.display())]
    NoIndexFile { path: PathBuf, extension: String },

    #[error("failed to write barrel file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Job errors
//!
//! Every failure is fatal for the run. Variants only attach the offending
//! path to the underlying error; nothing is retried or downgraded.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::display_path;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("I/O error on {}: {source}", display_path(.path))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", display_path(.path))]
    Encoding { path: PathBuf },

    #[error("failed to write delimited output {}: {source}", display_path(.path))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl JobError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        JobError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            JobError::Io { path, .. } | JobError::Encoding { path } | JobError::Csv { path, .. } => {
                path
            }
        }
    }
}

/// Attach a path to an `io::Result`
pub trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T, JobError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, JobError> {
        self.map_err(|e| JobError::io(path, e))
    }
}

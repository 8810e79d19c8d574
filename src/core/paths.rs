//! Job directory layout
//!
//! A run works against three directories under a base directory:
//! `raw/` (seed files), `input/` (working copies) and `output/` (results).

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default base directory, relative to the current directory
pub const DEFAULT_BASE_DIR: &str = "files";

/// Seed files directory name
pub const RAW_DIR: &str = "raw";

/// Working copies directory name
pub const INPUT_DIR: &str = "input";

/// Results directory name
pub const OUTPUT_DIR: &str = "output";

/// Explicit directory configuration for one job run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    /// Directory holding the original seed files
    pub seed_dir: PathBuf,

    /// Directory holding the generated copies that the pipeline reads
    pub input_dir: PathBuf,

    /// Directory receiving the report and the success marker
    pub output_dir: PathBuf,
}

impl JobConfig {
    pub fn new(
        seed_dir: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            seed_dir: seed_dir.into(),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Build the standard `raw/`, `input/`, `output/` layout under `base`
    pub fn from_base_dir(base: &Path) -> Self {
        Self::new(
            base.join(RAW_DIR),
            base.join(INPUT_DIR),
            base.join(OUTPUT_DIR),
        )
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self::from_base_dir(Path::new(DEFAULT_BASE_DIR))
    }
}

/// Name of the `index`-th working copy of a seed file
pub fn copy_file_name(index: usize, original: &str) -> String {
    format!("copy_{}_{}", index, original)
}

/// Render a path for logs and messages with '/' separators
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_dir() {
        let config = JobConfig::from_base_dir(Path::new("/job"));
        assert_eq!(config.seed_dir, PathBuf::from("/job/raw"));
        assert_eq!(config.input_dir, PathBuf::from("/job/input"));
        assert_eq!(config.output_dir, PathBuf::from("/job/output"));
    }

    #[test]
    fn test_default_uses_files_dir() {
        let config = JobConfig::default();
        assert_eq!(config.seed_dir, PathBuf::from("files").join("raw"));
        assert_eq!(config.output_dir, PathBuf::from("files").join("output"));
    }

    #[test]
    fn test_copy_file_name() {
        assert_eq!(copy_file_name(0, "sample.txt"), "copy_0_sample.txt");
        assert_eq!(copy_file_name(12, "notes"), "copy_12_notes");
    }

    #[test]
    fn test_copy_file_name_is_unique_per_index() {
        assert_ne!(copy_file_name(1, "a.txt"), copy_file_name(11, "a.txt"));
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(Path::new("files/raw")), "files/raw");
    }
}

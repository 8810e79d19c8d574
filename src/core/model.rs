//! Run data model
//!
//! Reports produced by each stage of a job. They are plain data so the CLI
//! can log them or serialize them as a JSON summary.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::paths::JobConfig;

/// One word taken from a normalized line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Position of the source line in the loaded line sequence
    pub line: usize,
    pub word: &'a str,
}

/// Outcome of materializing working copies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    /// Regular files found in the seed directory
    pub seed_files: usize,

    /// Copies written into the input directory
    pub copies_written: usize,

    /// Whether the seed directory was missing and a sample file was created
    pub sample_created: bool,
}

/// Paths of the files written by the output stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFiles {
    pub report: PathBuf,
    pub marker: PathBuf,
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    /// Raw lines read from the input directory
    pub lines: usize,

    /// Non-empty tokens produced by the tokenizer
    pub tokens: usize,

    /// Distinct words in the frequency table
    pub distinct_words: usize,

    pub output: OutputFiles,
}

/// Everything a CLI invocation did, printed by `--json`
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub config: JobConfig,
    pub materialize: MaterializeReport,
    pub job: JobReport,
    pub elapsed_secs: f64,
}

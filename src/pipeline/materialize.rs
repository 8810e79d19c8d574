//! Input materializer
//!
//! Fills the working input directory with numbered copies of every seed file.
//! A missing seed directory is the one recoverable condition: it is created
//! with a small sample so the job always has something to count.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::error::{IoResultExt, JobError};
use crate::core::model::MaterializeReport;
use crate::core::paths::{copy_file_name, display_path, JobConfig};

/// File name of the synthesized seed file
pub const SAMPLE_FILE_NAME: &str = "sample.txt";

/// Content of the synthesized seed file
pub const SAMPLE_CONTENT: &str = "Hola mundo\nMap Reduce en Python.\nHola, ChatGPT!\n";

/// Write `copies` copies of every seed file into the input directory
pub fn materialize_copies(
    config: &JobConfig,
    copies: usize,
) -> Result<MaterializeReport, JobError> {
    fs::create_dir_all(&config.input_dir).at(&config.input_dir)?;

    let mut report = MaterializeReport::default();

    if !config.seed_dir.exists() {
        warn!(
            "seed directory {} does not exist, creating sample files",
            display_path(&config.seed_dir)
        );
        create_sample(&config.seed_dir)?;
        report.sample_created = true;
    }

    let seeds = list_seed_files(&config.seed_dir)?;
    report.seed_files = seeds.len();

    for index in 0..copies {
        for (name, src) in &seeds {
            let dst = config.input_dir.join(copy_file_name(index, name));
            fs::copy(src, &dst).at(&dst)?;
            debug!("copied {} -> {}", display_path(src), display_path(&dst));
            report.copies_written += 1;
        }
    }

    info!(
        "materialized {} copies of {} seed files into {}",
        copies,
        report.seed_files,
        display_path(&config.input_dir)
    );

    Ok(report)
}

/// Create the seed directory with the sample file
fn create_sample(seed_dir: &Path) -> Result<(), JobError> {
    fs::create_dir_all(seed_dir).at(seed_dir)?;
    let path = seed_dir.join(SAMPLE_FILE_NAME);
    fs::write(&path, SAMPLE_CONTENT).at(&path)
}

/// Regular files directly inside the seed directory, with their names
fn list_seed_files(seed_dir: &Path) -> Result<Vec<(String, PathBuf)>, JobError> {
    let mut seeds = Vec::new();

    for entry in WalkDir::new(seed_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(seed_dir).to_path_buf();
            JobError::io(&path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        seeds.push((name, entry.into_path()));
    }

    Ok(seeds)
}

//! Output writer
//!
//! Persists the frequency table as `part_00000` (tab-separated, header
//! `word\tcount`) and then drops the `_SUCCESS` marker. Writes go straight
//! to their final names; a crash mid-write leaves a truncated file.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::core::error::{IoResultExt, JobError};
use crate::core::model::OutputFiles;
use crate::core::paths::display_path;
use crate::pipeline::aggregate::FrequencyTable;

/// Report file name
pub const REPORT_FILE: &str = "part_00000";

/// Success marker file name
pub const MARKER_FILE: &str = "_SUCCESS";

/// Success marker content
pub const MARKER_CONTENT: &str = "Job completed successfully.\n";

/// Header columns of the report
pub const HEADER: [&str; 2] = ["word", "count"];

/// Write the report and, once it is complete, the success marker
pub fn write_output(output_dir: &Path, table: &FrequencyTable) -> Result<OutputFiles, JobError> {
    fs::create_dir_all(output_dir).at(output_dir)?;

    let report = output_dir.join(REPORT_FILE);
    write_report(&report, table)?;

    let marker = output_dir.join(MARKER_FILE);
    fs::write(&marker, MARKER_CONTENT).at(&marker)?;

    info!(
        "wrote {} rows to {}",
        table.len(),
        display_path(&report)
    );

    Ok(OutputFiles { report, marker })
}

/// Write the tab-separated report
fn write_report(path: &Path, table: &FrequencyTable) -> Result<(), JobError> {
    let csv_err = |source| JobError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Headers are written explicitly so an empty table still gets one.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(HEADER).map_err(csv_err)?;
    for entry in table.entries() {
        writer.serialize(entry).map_err(csv_err)?;
    }
    writer.flush().at(path)?;

    Ok(())
}

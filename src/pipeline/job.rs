//! Job runner
//!
//! One linear pass: load, normalize, tokenize, aggregate, write. Nothing is
//! checkpointed between stages.

use tracing::{debug, info, warn};

use crate::core::error::JobError;
use crate::core::model::JobReport;
use crate::core::paths::{display_path, JobConfig};
use crate::pipeline::aggregate::FrequencyTable;
use crate::pipeline::loader::load_lines;
use crate::pipeline::normalize::normalize_line;
use crate::pipeline::output::write_output;
use crate::pipeline::tokenize::token_stream;

/// Run the word count job from `config.input_dir` into `config.output_dir`
pub fn run_job(config: &JobConfig) -> Result<JobReport, JobError> {
    info!(
        "running job: {} -> {}",
        display_path(&config.input_dir),
        display_path(&config.output_dir)
    );

    let lines = load_lines(&config.input_dir)?;
    let normalized: Vec<String> = lines.iter().map(|l| normalize_line(l)).collect();

    let tokens = token_stream(&normalized);
    let wordless_lines = lines.len() - count_lines_with_words(tokens.iter().map(|t| t.line));
    debug!(
        "{} tokens from {} lines ({} without words)",
        tokens.len(),
        lines.len(),
        wordless_lines
    );

    let token_count = tokens.len();
    let table = FrequencyTable::from_tokens(tokens.iter().map(|t| t.word));
    debug_assert_eq!(table.total(), token_count);
    if table.is_empty() {
        warn!("no words found in {}", display_path(&config.input_dir));
    } else {
        info!("{} distinct words", table.len());
    }

    let output = write_output(&config.output_dir, &table)?;

    Ok(JobReport {
        lines: lines.len(),
        tokens: token_count,
        distinct_words: table.len(),
        output,
    })
}

/// Number of distinct line indices in an ascending index sequence
fn count_lines_with_words(indices: impl Iterator<Item = usize>) -> usize {
    let mut count = 0;
    let mut last = None;
    for index in indices {
        if last != Some(index) {
            count += 1;
            last = Some(index);
        }
    }
    count
}

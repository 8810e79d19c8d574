//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::error;

use crate::core::logging::init_logging;
use crate::core::model::RunSummary;
use crate::core::paths::{display_path, JobConfig, DEFAULT_BASE_DIR};
use crate::pipeline::job::run_job;
use crate::pipeline::materialize::materialize_copies;

/// Default number of working copies per seed file
pub const DEFAULT_COPIES: usize = 10;

/// wordcount - count word frequencies across a folder of text files.
#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordcount runs a single-stage batch job over a base directory:

  raw/     seed text files (a sample is created if the directory is missing)
  input/   working copies, named copy_<i>_<name>
  output/  part_00000 (tab-separated word/count report) and _SUCCESS

Each run copies the seed files into input/, then loads, normalizes, tokenizes
and counts every line, and writes the report sorted by count descending.

Examples:
    wordcount
    wordcount --base-dir data --copies 1
    wordcount --copies 0 --json
"#
)]
pub struct Cli {
    /// Base directory holding raw/, input/ and output/.
    #[arg(long, default_value = DEFAULT_BASE_DIR, value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Number of copies of each seed file to materialize.
    #[arg(
        long,
        default_value_t = DEFAULT_COPIES,
        value_name = "N",
        long_help = "Number of copies of each seed file to write into input/.\n\n\
Use 0 to skip copying and count whatever input/ already contains."
    )]
    pub copies: usize,

    /// Print a JSON run summary instead of the elapsed time.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.quiet, cli.verbose);

    let config = JobConfig::from_base_dir(&cli.base_dir);

    let materialize = materialize_copies(&config, cli.copies)
        .inspect_err(|e| error!("materialize failed at {}", display_path(e.path())))
        .context("Failed to materialize input files")?;

    let start = Instant::now();
    let job = run_job(&config)
        .inspect_err(|e| error!("job failed at {}", display_path(e.path())))
        .context("Word count job failed")?;
    let elapsed = start.elapsed().as_secs_f64();

    if cli.json {
        let summary = RunSummary {
            config,
            materialize,
            job,
            elapsed_secs: elapsed,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Elapsed time: {:.2} seconds", elapsed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wordcount"]);
        assert_eq!(cli.base_dir, PathBuf::from("files"));
        assert_eq!(cli.copies, 10);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["wordcount", "--base-dir", "/tmp/job", "--copies", "0", "--json", "-v"]);
        assert_eq!(cli.base_dir, PathBuf::from("/tmp/job"));
        assert_eq!(cli.copies, 0);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_negative_copies() {
        assert!(Cli::try_parse_from(["wordcount", "--copies", "-1"]).is_err());
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["wordcount", "extra"]).is_err());
    }

    #[test]
    fn test_run_in_temp_dir() {
        let temp = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "wordcount".into(),
            "--base-dir".into(),
            temp.path().as_os_str().to_os_string(),
            "--copies".into(),
            "1".into(),
            "-q".into(),
        ]);

        run(cli).unwrap();

        assert!(temp.path().join("output/_SUCCESS").is_file());
        assert!(temp.path().join("input/copy_0_sample.txt").is_file());
    }
}

//! Logging initialization
//!
//! Diagnostics go to stderr so stdout stays reserved for the run result.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log level directive for the given verbosity flags
pub fn level_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize tracing; `RUST_LOG` takes precedence over the flags
pub fn init_logging(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(quiet, verbose)));

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    debug!("wordcount started (quiet={}, verbose={})", quiet, verbose);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(false, false), "warn");
        assert_eq!(level_directive(false, true), "debug");
        assert_eq!(level_directive(true, false), "error");
        // quiet wins over verbose
        assert_eq!(level_directive(true, true), "error");
    }
}

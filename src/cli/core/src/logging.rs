/* src/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, else a level picked from the verbosity flags.
pub fn filter(verbose: bool, quiet: bool) -> EnvFilter {
  if std::env::var("RUST_LOG").is_ok() {
    EnvFilter::from_default_env()
  } else if quiet {
    EnvFilter::new("warn")
  } else if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::new("info")
  }
}

pub fn init(verbose: bool, quiet: bool) {
  // A subscriber may already be installed (tests).
  let _ = tracing_subscriber::fmt().with_env_filter(filter(verbose, quiet)).with_target(false).try_init();
}

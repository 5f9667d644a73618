//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise `debug` when the debug flag is
/// set, or the configured level.
pub fn init_logging(debug: bool, level: &str) {
    let fallback = if debug { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}

//! Logging setup.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Install a human-readable logger. Level is controlled with `RUST_LOG`.
pub fn init() {
    let format = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_file(false);

    // Ignore the error if a logger is already installed, e.g. in tests.
    let _ = tracing_subscriber::registry()
        .with(format)
        .with(filter())
        .try_init();
}

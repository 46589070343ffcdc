//! Diagnostic logging for the `huewheel` binary.
//!
//! Events go to stderr so they never mix with rendered palettes on stdout.
//! `RUST_LOG` takes precedence; otherwise `--log-level` sets the threshold.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the event filter from optional `RUST_LOG`-style directives.
///
/// Directives that fail to parse are skipped rather than rejected.
pub fn filter(level: LevelFilter, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(level: LevelFilter) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = tracing_subscriber::registry()
        .with(filter(level, directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(console::Term::stderr().features().colors_supported()),
        );
    tracing::subscriber::set_global_default(subscriber)
}

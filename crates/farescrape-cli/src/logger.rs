//! Logging setup for the CLI.
//!
//! Log lines go to stderr so stdout carries only the scraped offers.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for farescrape crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for farescrape crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "farescrape=debug,farescrape_browser=debug,farescrape_config=debug,farescrape_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str =
    "farescrape=info,farescrape_browser=info,farescrape_config=info,farescrape_cli=info";

/// Picks the log filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

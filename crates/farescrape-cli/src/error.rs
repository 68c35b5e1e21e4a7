//! CLI error type and its miette rendering.

use farescrape::ScrapeError;
use farescrape_browser::BrowserError;
use farescrape_config::ConfigError;
use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScrapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert CliError to miette Report, with a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match hint_for(&err) {
        Some(hint) => miette::miette!("{}\n\nHint: {}", err, hint),
        None => miette::miette!("{}", err),
    }
}

fn hint_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Config(ConfigError::NotFound(_)) => {
            Some("Create farescrape.toml or point --config at an existing file")
        }
        CliError::Config(ConfigError::Load(_)) => {
            Some("Check farescrape.toml syntax and FARESCRAPE_* variables")
        }
        CliError::Scrape(ScrapeError::PageTimeout { .. }) => {
            Some("The search did not finish in time; raise --timeout-ms or --retries")
        }
        CliError::Scrape(ScrapeError::MalformedExtraction { .. }) => {
            Some("The results page layout may have changed; check the failure screenshots")
        }
        CliError::Scrape(ScrapeError::InvalidDateFormat { .. }) => {
            Some("Use a chrono format such as %d-%m-%Y")
        }
        CliError::Scrape(ScrapeError::Session(BrowserError::LaunchFailed { .. })) => {
            Some("Install Chrome/Chromium or set browser.chrome_path")
        }
        _ => None,
    }
}

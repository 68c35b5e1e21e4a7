//! Error types for the scrape-and-recover core.
//!
//! Each variant is a distinct failure kind. The orchestrator retries all of
//! them the same way and surfaces the last one unchanged once the retry budget
//! is spent.

use farescrape_browser::BrowserError;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while scraping one route and date.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The number of extracted values does not divide into whole records.
    ///
    /// Signals that the extractor's field order and the decoder's stride have
    /// drifted apart, or that fields failed to resolve on the page.
    #[error("extracted {count} field values, which is not a multiple of the record stride {stride}")]
    MalformedExtraction {
        /// Number of values handed to the decoder
        count: usize,
        /// Values per record
        stride: usize,
    },

    /// The page never reported that the search completed.
    #[error("search did not complete within {timeout:?}")]
    PageTimeout {
        /// The completion timeout that elapsed
        timeout: Duration,
    },

    /// Capturing or persisting the diagnostic screenshot failed.
    #[error("failed to capture evidence '{name}': {source}")]
    EvidenceCapture {
        /// File name the screenshot was meant to be stored under
        name: String,
        /// Underlying capture or write failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The date format cannot render a date.
    #[error("invalid date format '{format}'")]
    InvalidDateFormat {
        /// The rejected chrono format string
        format: String,
    },

    /// The automation session failed or is unusable.
    #[error("browser session error: {0}")]
    Session(#[from] BrowserError),
}

impl ScrapeError {
    /// Short, stable name of the failure kind, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedExtraction { .. } => "malformed_extraction",
            Self::PageTimeout { .. } => "page_timeout",
            Self::EvidenceCapture { .. } => "evidence_capture",
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::Session(_) => "session",
        }
    }
}

/// A specialized Result type for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_extraction_message_names_counts() {
        let err = ScrapeError::MalformedExtraction {
            count: 21,
            stride: 11,
        };
        let msg = err.to_string();
        assert!(msg.contains("21"));
        assert!(msg.contains("11"));
        assert_eq!(err.kind(), "malformed_extraction");
    }

    #[test]
    fn browser_errors_convert_to_session_errors() {
        let err: ScrapeError = BrowserError::NotStarted.into();
        assert!(matches!(err, ScrapeError::Session(BrowserError::NotStarted)));
        assert_eq!(err.kind(), "session");
    }
}

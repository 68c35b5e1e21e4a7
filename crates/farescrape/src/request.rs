//! Parameters of one scrape invocation.

use crate::query::DEFAULT_BASE_URL;
use crate::types::Route;
use chrono::NaiveDate;
use std::time::Duration;

/// Default chrono format for the searched date (the site expects `DD-MM-YYYY`).
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Default currency requested from the site.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Default time to wait for the search to complete.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(80);

/// Default interval between completion-status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 1;

/// Everything needed to scrape one route on one date.
///
/// Built with [`ScrapeRequest::new`] and adjusted with the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub route: Route,
    pub date: NaiveDate,
    /// chrono format used in the search URL and in each offer's `date`.
    pub date_format: String,
    pub currency: String,
    pub direct_flight: bool,
    /// Maximize the browser window before navigating.
    pub maximize: bool,
    /// How long to wait for the page to report completion.
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Retries after the first attempt; at most `retries + 1` attempts run.
    pub retries: u32,
    pub base_url: String,
}

impl ScrapeRequest {
    /// Creates a request with default settings.
    #[must_use]
    pub fn new(route: Route, date: NaiveDate) -> Self {
        Self {
            route,
            date,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            direct_flight: false,
            maximize: false,
            timeout: DEFAULT_COMPLETION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            retries: DEFAULT_RETRIES,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_direct_flight(mut self, direct_flight: bool) -> Self {
        self.direct_flight = direct_flight;
        self
    }

    #[must_use]
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

//! # farescrape
//!
//! Collects flight offers for one route and date from momondo's
//! browser-rendered search page, recovering from flaky page loads.
//!
//! ## Architecture
//!
//! - **Scraper**: bounded retry loop; screenshots each failure and restarts
//!   the browser when even the screenshot fails
//! - **retrieve**: one attempt: navigate, wait for "Search complete", read listings
//! - **extract_all**: fans out one future per field per listing and keeps the
//!   values that resolved, in order
//! - **decode**: groups values into [`FlightOffer`]s, [`STRIDE`] at a time
//!
//! ## Example Usage
//!
//! ```ignore
//! use farescrape::{FsEvidenceSink, Route, ScrapeRequest, Scraper};
//! use farescrape_browser::{ChromeConfig, ChromeLauncher};
//! use chrono::NaiveDate;
//!
//! let mut scraper = Scraper::new(
//!     ChromeLauncher::new(ChromeConfig::default()),
//!     FsEvidenceSink::default(),
//! );
//! scraper.start_session().await?;
//!
//! let request = ScrapeRequest::new(
//!     Route::new("LIS", "LON"),
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//! )
//! .with_retries(3);
//! let offers = scraper.scrap(&request).await;
//!
//! scraper.stop_session().await?;
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod error;
pub mod evidence;
pub mod extract;
pub mod field;
pub mod query;
pub mod request;
pub mod retrieve;
pub mod scraper;
pub mod types;

pub use decode::{decode, format_date};
pub use error::{Result, ScrapeError};
pub use evidence::{Clock, EvidenceSink, FsEvidenceSink, SystemClock, screenshot_name};
pub use extract::{Settled, extract_all};
pub use field::{Field, STRIDE};
pub use query::{DEFAULT_BASE_URL, search_url};
pub use request::ScrapeRequest;
pub use retrieve::retrieve;
pub use scraper::Scraper;
pub use types::{FlightOffer, RawFieldValue, Route};

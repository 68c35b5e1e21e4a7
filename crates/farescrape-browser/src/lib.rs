//! # farescrape-browser
//!
//! Automation-session primitives for scraping browser-rendered pages, built
//! on chromiumoxide.
//!
//! ## Architecture
//!
//! - **Session / Element / Launcher**: the traits the scraping core drives
//! - **ChromeLauncher**: spawns headless Chrome and yields a `ChromeSession`
//! - **ChromePage / ChromeElement**: navigation, CSS lookup, text, screenshots
//! - **WaitConfig**: poll-until-condition with a timeout
//!
//! ## Example Usage
//!
//! ```ignore
//! use farescrape_browser::{ChromeConfig, ChromeLauncher, Launcher, Session};
//!
//! let launcher = ChromeLauncher::new(ChromeConfig::default());
//! let session = launcher.launch().await?;
//! session.navigate("https://example.com").await?;
//! let heading = session.find_element("h1").await?;
//! println!("{}", heading.text().await?);
//! session.close().await?;
//! ```
//!
//! Tests that need a real Chrome are `#[ignore]`d; run them with
//! `cargo test -p farescrape-browser -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod session;
pub mod wait;

pub use browser::{ChromeConfig, ChromeLauncher, ChromeSession};
pub use error::{BrowserError, Result};
pub use page::{ChromeElement, ChromePage};
pub use session::{Element, Launcher, Session};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitConfig, wait_for_result};

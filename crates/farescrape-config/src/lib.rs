//! Configuration for farescrape.
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. A TOML file (an explicit path, or `./farescrape.toml` when present)
//! 3. `FARESCRAPE_` environment variables, nested with `__`
//!    (`FARESCRAPE_SCRAPE__RETRIES=3`)
//!
//! Command-line flags are applied on top by the CLI, which then calls
//! [`Settings::validate`].

pub mod error;
pub mod loading;
pub mod settings;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loading::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use settings::{BrowserSettings, EvidenceSettings, ScrapeSettings, Settings};

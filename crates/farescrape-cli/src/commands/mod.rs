//! Command implementations.
//!
//! - [`scrape`] - run one scrape and print the offers
//! - [`config`] - print the resolved configuration

pub mod config;
pub mod scrape;

pub use config::execute as config_execute;
pub use scrape::execute as scrape_execute;

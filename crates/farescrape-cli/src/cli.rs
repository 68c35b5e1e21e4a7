//! Command-line interface definition.
//!
//! - `farescrape scrape` - scrape offers for one route and date
//! - `farescrape config` - print the resolved configuration

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// farescrape - flight offers from momondo's search page
#[derive(Parser, Debug)]
#[command(
    name = "farescrape",
    version,
    about = "Scrape flight offers for a route and date",
    long_about = "farescrape drives a headless Chrome through momondo's flight search,\n\
                  waits for the search to complete and prints the listed offers.\n\
                  Failed attempts are retried; each failure leaves a screenshot behind."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape offers for one route and date
    ///
    /// Starts a browser session, runs the search with retries and prints the
    /// offers found. Screenshots of failed attempts go to the evidence directory.
    Scrape(ScrapeArgs),

    /// Print the resolved configuration as TOML
    ///
    /// Shows the result of layering defaults, farescrape.toml and
    /// FARESCRAPE_* environment variables.
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Origin airport or city code
    #[arg(long, value_name = "CODE", value_parser = parse_place)]
    pub from: String,

    /// Destination airport or city code
    #[arg(long, value_name = "CODE", value_parser = parse_place)]
    pub to: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: NaiveDate,

    /// Currency code for prices
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,

    /// chrono format the site expects for the date
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Only direct flights
    #[arg(long)]
    pub direct: bool,

    /// Maximize the browser window before searching
    #[arg(long)]
    pub maximize: bool,

    /// How long to wait for the search to complete
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Retries after the first failed attempt
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Where failure screenshots are written
    #[arg(long, value_name = "DIR")]
    pub screenshot_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,

    /// Config file (default: ./farescrape.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    pub visible: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Config file (default: ./farescrape.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array on stdout
    #[value(name = "json")]
    Json,

    /// Aligned table on stdout
    #[value(name = "table")]
    Table,
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("expected YYYY-MM-DD, got '{s}'"))
}

/// Parse a non-blank place code.
pub fn parse_place(s: &str) -> Result<String, String> {
    let code = s.trim();
    if code.is_empty() {
        return Err("place code cannot be empty".to_string());
    }
    Ok(code.to_string())
}

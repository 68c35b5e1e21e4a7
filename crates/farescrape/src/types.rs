//! Records produced by the scraper and the raw values they are decoded from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin and destination airport codes for one search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Origin airport (or city) code, e.g. `LIS`
    pub from: String,
    /// Destination airport (or city) code, e.g. `LON`
    pub to: String,
}

impl Route {
    /// Creates a route between two codes.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// One flight offer as listed on the results page.
///
/// Text fields are kept as displayed; `price` is not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub airline: String,
    pub price: String,
    pub currency: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Days between departure and arrival; 0 when the page shows none.
    pub days_later: u32,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub duration: String,
    pub stops: String,
    pub fare_class: String,
    /// The searched route, as supplied by the caller.
    pub route: Route,
    /// The searched date, rendered with the caller's date format.
    pub date: String,
}

/// A single scalar read from one listing element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFieldValue {
    /// Text read from the page.
    Text(String),
    /// A synthesized number (the days-later default).
    Int(i64),
}

impl RawFieldValue {
    /// Renders the value as display text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.trim().to_string(),
            Self::Int(n) => n.to_string(),
        }
    }

    /// Interprets the value as a day offset.
    ///
    /// The page renders offsets like `+1`; only the digits count. Text without
    /// digits and negative numbers yield 0.
    #[must_use]
    pub fn to_day_offset(&self) -> u32 {
        match self {
            Self::Int(n) => u32::try_from(*n).unwrap_or(0),
            Self::Text(s) => {
                let digits: String = s.chars().filter(char::is_ascii_digit).collect();
                digits.parse().unwrap_or(0)
            }
        }
    }
}

impl From<&str> for RawFieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawFieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for RawFieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

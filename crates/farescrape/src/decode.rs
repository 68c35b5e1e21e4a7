//! Fixed-stride decoding of extracted values into flight offers.

use crate::error::{Result, ScrapeError};
use crate::field::{Field, STRIDE};
use crate::types::{FlightOffer, RawFieldValue, Route};
use chrono::NaiveDate;
use std::fmt::Write;

/// Decodes a flat value sequence into offers, one per block of [`STRIDE`] values.
///
/// Blocks are decoded in order, and every offer carries `route` and `date`
/// (rendered with `date_format`) as its context.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedExtraction`] when `values.len()` is not a
/// multiple of [`STRIDE`]; nothing is decoded in that case.
pub fn decode(
    values: &[RawFieldValue],
    date: NaiveDate,
    date_format: &str,
    route: &Route,
) -> Result<Vec<FlightOffer>> {
    if values.len() % STRIDE != 0 {
        tracing::error!(
            count = values.len(),
            stride = STRIDE,
            %route,
            "extracted values do not divide into whole records"
        );
        return Err(ScrapeError::MalformedExtraction {
            count: values.len(),
            stride: STRIDE,
        });
    }

    let date = format_date(date, date_format)?;
    Ok(values
        .chunks_exact(STRIDE)
        .map(|block| build_offer(block, &date, route))
        .collect())
}

/// Renders `date` with a chrono format string.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidDateFormat`] if the format has unknown or
/// malformed specifiers.
pub fn format_date(date: NaiveDate, date_format: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(date_format)).map_err(|_| {
        ScrapeError::InvalidDateFormat {
            format: date_format.to_string(),
        }
    })?;
    Ok(rendered)
}

fn build_offer(block: &[RawFieldValue], date: &str, route: &Route) -> FlightOffer {
    let text = |field: Field| block[field.index()].to_text();

    FlightOffer {
        airline: text(Field::Airline),
        price: text(Field::Price),
        currency: text(Field::Currency),
        departure_time: text(Field::DepartureTime),
        arrival_time: text(Field::ArrivalTime),
        days_later: block[Field::DaysLater.index()].to_day_offset(),
        departure_airport: text(Field::DepartureAirport),
        arrival_airport: text(Field::ArrivalAirport),
        duration: text(Field::Duration),
        stops: text(Field::Stops),
        fare_class: text(Field::FareClass),
        route: route.clone(),
        date: date.to_string(),
    }
}

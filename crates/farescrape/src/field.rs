//! Field positions of a listing element and where to find them.
//!
//! The extractor walks [`Field::ALL`] for every listing element and the decoder
//! reads blocks of [`STRIDE`] values in the same order. Reordering fields here
//! changes both sides at once.

/// Values per decoded record.
pub const STRIDE: usize = Field::ALL.len();

/// One extracted field of a flight listing, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Airline,
    Price,
    Currency,
    DepartureTime,
    ArrivalTime,
    DaysLater,
    DepartureAirport,
    ArrivalAirport,
    Duration,
    Stops,
    FareClass,
}

impl Field {
    /// All fields in extraction order.
    pub const ALL: [Field; 11] = [
        Field::Airline,
        Field::Price,
        Field::Currency,
        Field::DepartureTime,
        Field::ArrivalTime,
        Field::DaysLater,
        Field::DepartureAirport,
        Field::ArrivalAirport,
        Field::Duration,
        Field::Stops,
        Field::FareClass,
    ];

    /// CSS selector of the field, relative to its listing element.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Field::Airline => "div.names",
            Field::Price => "div.price-pax .price span.value",
            Field::Currency => "div.price-pax .price span.unit",
            Field::DepartureTime => "div.departure > div > div.iata-time > span.time",
            Field::ArrivalTime => "div.destination > div > div.iata-time > span.time",
            Field::DaysLater => "div.destination > div > div.iata-time > span.days-later",
            Field::DepartureAirport => "div.departure > div > div.iata-time > span.iata",
            Field::ArrivalAirport => "div.destination > div > div.iata-time > span.iata",
            Field::Duration => ".travel-time",
            Field::Stops => "div.travel-stops > .total",
            Field::FareClass => "div.info div.class",
        }
    }

    /// Value substituted when extraction fails; only days-later has one.
    #[must_use]
    pub fn default_value(self) -> Option<i64> {
        match self {
            Field::DaysLater => Some(0),
            _ => None,
        }
    }

    /// Position of the field inside a record block.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_matches_field_count() {
        assert_eq!(STRIDE, 11);
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn only_days_later_has_a_default() {
        let defaulted: Vec<_> = Field::ALL
            .iter()
            .filter(|f| f.default_value().is_some())
            .collect();
        assert_eq!(defaulted, vec![&Field::DaysLater]);
        assert_eq!(Field::DaysLater.default_value(), Some(0));
    }
}

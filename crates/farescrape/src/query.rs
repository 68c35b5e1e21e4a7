//! Search URL construction for the momondo flight search page.

/// Default site root searches are issued against.
pub const DEFAULT_BASE_URL: &str = "http://www.momondo.co.uk";

/// Builds the one-way economy search URL for a single adult.
///
/// `date` must already be rendered in the format the site expects.
#[must_use]
pub fn search_url(
    base_url: &str,
    from: &str,
    to: &str,
    date: &str,
    currency: &str,
    direct_only: bool,
) -> String {
    let params = [
        ("Search", "true"),
        ("TripType", "1"),
        ("SegNo", "1"),
        ("SO0", from),
        ("SD0", to),
        ("SDP0", date),
        ("AD", "1"),
        ("TK", "ECO"),
        ("DO", if direct_only { "true" } else { "false" }),
        ("NA", "false"),
        ("currency", currency),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/flightsearch/?{query}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_momondo_query() {
        let url = search_url(DEFAULT_BASE_URL, "LIS", "LON", "01-06-2024", "EUR", false);
        assert_eq!(
            url,
            "http://www.momondo.co.uk/flightsearch/?Search=true&TripType=1&SegNo=1\
             &SO0=LIS&SD0=LON&SDP0=01-06-2024&AD=1&TK=ECO&DO=false&NA=false&currency=EUR"
        );
    }

    #[test]
    fn direct_flag_and_trailing_slash() {
        let url = search_url("https://example.test/", "OPO", "PAR", "02-06-2024", "GBP", true);
        assert!(url.starts_with("https://example.test/flightsearch/?"));
        assert!(url.contains("&DO=true&"));
        assert!(url.ends_with("currency=GBP"));
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = search_url(DEFAULT_BASE_URL, "LIS", "LON", "01/06/2024", "EUR", false);
        assert!(url.contains("SDP0=01%2F06%2F2024"));
    }
}

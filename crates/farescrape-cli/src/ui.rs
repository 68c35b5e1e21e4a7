//! Terminal output: status lines on stderr, offer tables on stdout.

use console::{Term, style};
use farescrape::FlightOffer;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silences status lines (`--quiet`). Offers on stdout are still printed.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether status lines are written to stderr.
pub fn status_enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Enables or disables colors for both streams.
///
/// `NO_COLOR` and `FORCE_COLOR` are respected unless `--no-color` was given.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Print a success message to stderr unless quiet.
pub fn success(message: &str) {
    if status_enabled() {
        eprintln!("{} {}", style("✓").green().bold(), message);
    }
}

/// Print a warning message to stderr unless quiet.
pub fn warning(message: &str) {
    if status_enabled() {
        eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
    }
}

const HEADERS: [&str; 8] = [
    "AIRLINE", "PRICE", "DEPART", "ARRIVE", "FROM", "TO", "DURATION", "STOPS",
];

fn row(offer: &FlightOffer) -> [String; 8] {
    let arrive = if offer.days_later > 0 {
        format!("{} +{}", offer.arrival_time, offer.days_later)
    } else {
        offer.arrival_time.clone()
    };
    [
        offer.airline.clone(),
        format!("{} {}", offer.price, offer.currency),
        offer.departure_time.clone(),
        arrive,
        offer.departure_airport.clone(),
        offer.arrival_airport.clone(),
        offer.duration.clone(),
        offer.stops.clone(),
    ]
}

/// Renders offers as a left-aligned table, one line per offer.
pub fn format_table(offers: &[FlightOffer]) -> String {
    let rows: Vec<[String; 8]> = offers.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", style(header.join("  ").trim_end()).bold());

    for cells in &rows {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

/// Prints the offer table to stdout.
pub fn print_table(offers: &[FlightOffer]) -> std::io::Result<()> {
    Term::stdout().write_str(&format_table(offers))
}

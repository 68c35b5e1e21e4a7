//! A single attempt at loading the results page and reading its offers.

use crate::decode::{decode, format_date};
use crate::error::{Result, ScrapeError};
use crate::extract::extract_all;
use crate::query::search_url;
use crate::request::ScrapeRequest;
use crate::types::FlightOffer;
use farescrape_browser::{BrowserError, Element, Session, WaitConfig, wait_for_result};
use tracing::debug;

/// Element whose text reports search progress.
pub const PROGRESS_SELECTOR: &str = "#searchProgressText";

/// Progress text shown once every provider has answered.
pub const SEARCH_COMPLETE: &str = "Search complete";

/// Container of the result listings.
pub const RESULTS_SELECTOR: &str = "#results-tickets";

/// Regular (non-sponsored) listings inside the results container.
pub const LISTING_SELECTOR: &str = "div.result-box.standard";

/// Loads the search page for `request` and decodes the offers it lists.
///
/// An empty results container yields an empty vector, not an error.
///
/// # Errors
///
/// - [`ScrapeError::PageTimeout`] if the progress text never reads
///   [`SEARCH_COMPLETE`] within `request.timeout`.
/// - [`ScrapeError::MalformedExtraction`] if surviving field values do not
///   form whole records.
/// - [`ScrapeError::Session`] for any other driver failure.
pub async fn retrieve<S: Session>(session: &S, request: &ScrapeRequest) -> Result<Vec<FlightOffer>> {
    if request.maximize {
        session.maximize().await?;
    }

    let date = format_date(request.date, &request.date_format)?;
    let url = search_url(
        &request.base_url,
        &request.route.from,
        &request.route.to,
        &date,
        &request.currency,
        request.direct_flight,
    );

    debug!(%url, "navigating to search page");
    session.navigate(&url).await?;

    wait_for_completion(session, request).await?;

    let board = session.find_element(RESULTS_SELECTOR).await?;
    let listings = board.find_elements(LISTING_SELECTOR).await?;

    if listings.is_empty() {
        debug!(route = %request.route, %date, "no data found");
        return Ok(Vec::new());
    }

    let values = extract_all(&listings).await;
    let offers = decode(&values, request.date, &request.date_format, &request.route)?;

    if let Some(first) = offers.first() {
        debug!(count = offers.len(), first = ?first, "decoded offers");
    }
    Ok(offers)
}

async fn wait_for_completion<S: Session>(session: &S, request: &ScrapeRequest) -> Result<()> {
    let config = WaitConfig::new(request.timeout, request.poll_interval);

    wait_for_result(
        move || async move {
            let status = session.find_element(PROGRESS_SELECTOR).await?;
            Ok::<_, BrowserError>(status.text().await?.trim() == SEARCH_COMPLETE)
        },
        config,
        "search complete",
    )
    .await
    .map_err(|e| match e {
        BrowserError::WaitTimeout { timeout, .. } => ScrapeError::PageTimeout { timeout },
        other => ScrapeError::Session(other),
    })
}

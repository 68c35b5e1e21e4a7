//! Single-attempt page retrieval against a simulated results page.

mod common;

use common::{Listing, MockSite, PageBehavior, june_first};
use farescrape::{Field, Route, ScrapeError, ScrapeRequest, retrieve};
use farescrape_browser::Launcher;
use std::time::Duration;

fn request() -> ScrapeRequest {
    ScrapeRequest::new(Route::new("LIS", "LON"), june_first())
        .with_timeout(Duration::from_millis(50))
        .with_poll_interval(Duration::from_millis(5))
}

#[tokio::test]
async fn decodes_listings_after_completion() {
    let site = MockSite::new().then(PageBehavior::Results(vec![
        Listing::complete("a"),
        Listing::complete("b"),
    ]));
    let session = site.launcher().launch().await.unwrap();

    let offers = retrieve(&session, &request()).await.unwrap();

    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].airline, "Airline a");
    assert_eq!(offers[1].airline, "Airline b");
    assert_eq!(offers[0].days_later, 1);
    assert_eq!(offers[1].date, "01-06-2024");

    let url = site.recorded(|r| r.navigations[0].1.clone());
    assert!(url.contains("SO0=LIS&SD0=LON&SDP0=01-06-2024"));
    assert!(url.contains("currency=EUR"));
}

#[tokio::test]
async fn empty_results_are_not_an_error() {
    let site = MockSite::new().then(PageBehavior::Results(Vec::new()));
    let session = site.launcher().launch().await.unwrap();

    let offers = retrieve(&session, &request()).await.unwrap();

    assert!(offers.is_empty());
}

#[tokio::test]
async fn never_completing_page_times_out() {
    let site = MockSite::new().then(PageBehavior::NeverCompletes);
    let session = site.launcher().launch().await.unwrap();

    let err = retrieve(&session, &request()).await.unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::PageTimeout { timeout } if timeout == Duration::from_millis(50)
    ));
}

#[tokio::test]
async fn navigation_failure_is_a_session_error() {
    let site = MockSite::new().then(PageBehavior::NavigationError);
    let session = site.launcher().launch().await.unwrap();

    let err = retrieve(&session, &request()).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Session(_)));
}

#[tokio::test]
async fn stride_mismatch_is_malformed() {
    let site = MockSite::new().then(PageBehavior::Results(vec![
        Listing::complete("a").without(Field::Airline),
        Listing::complete("b"),
    ]));
    let session = site.launcher().launch().await.unwrap();

    let err = retrieve(&session, &request()).await.unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::MalformedExtraction { count: 21, stride: 11 }
    ));
}

#[tokio::test]
async fn maximizes_only_when_asked() {
    let site = MockSite::new().otherwise(PageBehavior::Results(Vec::new()));
    let session = site.launcher().launch().await.unwrap();

    retrieve(&session, &request()).await.unwrap();
    assert_eq!(site.recorded(|r| r.maximized.len()), 0);

    retrieve(&session, &request().with_maximize(true)).await.unwrap();
    assert_eq!(site.recorded(|r| r.maximized.clone()), vec![session.id]);
}

#[tokio::test]
async fn direct_flag_reaches_the_url() {
    let site = MockSite::new().then(PageBehavior::Results(Vec::new()));
    let session = site.launcher().launch().await.unwrap();

    retrieve(&session, &request().with_direct_flight(true).with_currency("GBP"))
        .await
        .unwrap();

    let url = site.recorded(|r| r.navigations[0].1.clone());
    assert!(url.contains("DO=true"));
    assert!(url.contains("currency=GBP"));
}

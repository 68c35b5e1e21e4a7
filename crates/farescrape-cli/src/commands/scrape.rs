use crate::cli::{OutputFormat, ScrapeArgs};
use crate::error::Result;
use crate::ui;
use farescrape::{FlightOffer, FsEvidenceSink, Route, ScrapeRequest, Scraper};
use farescrape_browser::{ChromeConfig, ChromeLauncher};
use farescrape_config::{BrowserSettings, Settings};
use tracing::{info, warn};

/// Runs one scrape: start the session, scrape, stop the session, print.
///
/// The session is stopped whether or not the scrape succeeded.
pub async fn execute(args: ScrapeArgs) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&mut settings, &args);
    settings.validate()?;

    let request = build_request(&settings, &args);
    let launcher = ChromeLauncher::new(chrome_config(&settings.browser));
    let evidence = FsEvidenceSink::new(settings.evidence.screenshot_dir.clone());

    info!(route = %request.route, date = %request.date, "starting scrape");

    let mut scraper = Scraper::new(launcher, evidence);
    scraper.start_session().await?;
    let outcome = scraper.scrap(&request).await;
    if let Err(e) = scraper.stop_session().await {
        warn!(error = %e, "failed to stop browser session");
    }
    let offers = outcome?;

    if offers.is_empty() {
        ui::warning(&format!("no offers found for {} on {}", request.route, request.date));
    } else {
        ui::success(&format!("found {} offers for {}", offers.len(), request.route));
    }
    print_offers(&offers, args.output)
}

/// Applies command-line flags on top of the loaded settings.
pub fn apply_overrides(settings: &mut Settings, args: &ScrapeArgs) {
    let scrape = &mut settings.scrape;
    if let Some(currency) = &args.currency {
        scrape.currency.clone_from(currency);
    }
    if let Some(format) = &args.date_format {
        scrape.date_format.clone_from(format);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        scrape.timeout_ms = timeout_ms;
    }
    if let Some(retries) = args.retries {
        scrape.retries = retries;
    }
    scrape.direct_flight |= args.direct;
    scrape.maximize |= args.maximize;

    if args.visible {
        settings.browser.headless = false;
    }
    if let Some(dir) = &args.screenshot_dir {
        settings.evidence.screenshot_dir.clone_from(dir);
    }
}

/// Builds the scrape request from merged settings and the route arguments.
pub fn build_request(settings: &Settings, args: &ScrapeArgs) -> ScrapeRequest {
    let scrape = &settings.scrape;
    ScrapeRequest::new(Route::new(&args.from, &args.to), args.date)
        .with_base_url(&scrape.base_url)
        .with_currency(&scrape.currency)
        .with_date_format(&scrape.date_format)
        .with_direct_flight(scrape.direct_flight)
        .with_maximize(scrape.maximize)
        .with_timeout(scrape.timeout())
        .with_poll_interval(scrape.poll_interval())
        .with_retries(scrape.retries)
}

pub fn chrome_config(browser: &BrowserSettings) -> ChromeConfig {
    let mut config = ChromeConfig::new()
        .with_window_size(browser.window_width, browser.window_height)
        .with_args(browser.args.clone());
    if !browser.headless {
        config = config.visible();
    }
    if let Some(path) = &browser.chrome_path {
        config = config.with_chrome_path(path.to_string_lossy());
    }
    config
}

fn print_offers(offers: &[FlightOffer], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(offers)?),
        OutputFormat::Table => ui::print_table(offers)?,
    }
    Ok(())
}

//! Retry/recovery orchestration around the page retrieval step.
//!
//! Each failed attempt is followed by a diagnostic screenshot. When the
//! screenshot itself cannot be taken or stored, the browser session is assumed
//! to be wedged and is replaced before the next attempt.
//!
//! ```text
//! Attempting ──ok──────────────────────────────▶ Succeeded
//!     │
//!     └─err─▶ capture evidence ─┬─ budget spent ─▶ ExhaustedFailed (last error)
//!                               ├─ captured ─────▶ Attempting (budget - 1)
//!                               └─ capture failed ▶ SessionRestart ▶ Attempting (budget - 1)
//! ```

use crate::decode::format_date;
use crate::error::{Result, ScrapeError};
use crate::evidence::{Clock, EvidenceSink, FsEvidenceSink, SystemClock, screenshot_name};
use crate::request::ScrapeRequest;
use crate::retrieve::retrieve;
use crate::types::FlightOffer;
use farescrape_browser::{BrowserError, Launcher, Session};
use tracing::{debug, info, warn};

/// Owns the automation session and drives scrapes through it.
///
/// `scrap` takes `&mut self`, so one scraper never runs two attempts against
/// its session at the same time.
pub struct Scraper<L: Launcher, E = FsEvidenceSink, C = SystemClock> {
    launcher: L,
    session: Option<L::Session>,
    evidence: E,
    clock: C,
}

impl<L: Launcher, E: EvidenceSink> Scraper<L, E, SystemClock> {
    /// Creates a scraper with no running session.
    pub fn new(launcher: L, evidence: E) -> Self {
        Self {
            launcher,
            session: None,
            evidence,
            clock: SystemClock,
        }
    }
}

impl<L, E, C> Scraper<L, E, C>
where
    L: Launcher,
    E: EvidenceSink,
    C: Clock,
{
    /// Replaces the clock used to timestamp screenshots.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Scraper<L, E, C2> {
        Scraper {
            launcher: self.launcher,
            session: self.session,
            evidence: self.evidence,
            clock,
        }
    }

    /// Returns true while a session is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Starts the browser session. A running session is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Session`] if the browser cannot be launched.
    pub async fn start_session(&mut self) -> Result<()> {
        if self.session.is_some() {
            debug!("session already running, replacing it");
            self.stop_session().await?;
        }
        self.session = Some(self.launcher.launch().await?);
        info!("browser session started");
        Ok(())
    }

    /// Stops the browser session. Does nothing if none is running.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Session`] if the browser fails to close cleanly;
    /// the session is discarded either way.
    pub async fn stop_session(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            session.close().await?;
            info!("browser session stopped");
        }
        Ok(())
    }

    /// Scrapes the offers for one route and date.
    ///
    /// Runs at most `request.retries + 1` attempts. Every failed attempt is
    /// followed by a screenshot; if that fails the session is restarted before
    /// the next attempt.
    ///
    /// # Errors
    ///
    /// - The last attempt's error, unchanged, once the retry budget is spent.
    /// - [`ScrapeError::Session`] with [`BrowserError::NotStarted`] if no
    ///   session is running, or the launch error if a restart fails.
    /// - [`ScrapeError::InvalidDateFormat`] before any attempt if the request's
    ///   date format is unusable.
    pub async fn scrap(&mut self, request: &ScrapeRequest) -> Result<Vec<FlightOffer>> {
        format_date(request.date, &request.date_format)?;

        let mut remaining = request.retries;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let session = self.session.as_ref().ok_or(BrowserError::NotStarted)?;

            let error = match retrieve(session, request).await {
                Ok(offers) => {
                    info!(
                        route = %request.route,
                        date = %request.date,
                        attempt,
                        offers = offers.len(),
                        "scrape succeeded"
                    );
                    return Ok(offers);
                }
                Err(error) => error,
            };

            warn!(
                route = %request.route,
                attempt,
                remaining,
                kind = error.kind(),
                %error,
                "caught an error while trying to retrieve the flights"
            );

            let capture = self.capture_evidence(request).await;

            if remaining == 0 {
                if let Err(capture_error) = capture {
                    warn!(error = %capture_error, "failed to take screenshot");
                }
                return Err(error);
            }
            remaining -= 1;

            if let Err(capture_error) = capture {
                warn!(error = %capture_error, "failed to take screenshot, restarting session");
                self.restart_session().await?;
            }

            debug!(next_attempt = attempt + 1, remaining, "retrying");
        }
    }

    async fn capture_evidence(&self, request: &ScrapeRequest) -> Result<()> {
        let name = screenshot_name(self.clock.now(), &request.route, request.date);
        let capture_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ScrapeError::EvidenceCapture {
                name: name.clone(),
                source,
            }
        };

        let session = self
            .session
            .as_ref()
            .ok_or_else(|| capture_failed(Box::new(BrowserError::NotStarted)))?;
        let png = session
            .screenshot()
            .await
            .map_err(|e| capture_failed(Box::new(e)))?;
        self.evidence
            .write_screenshot(&name, &png)
            .await
            .map_err(|e| capture_failed(Box::new(e)))?;

        debug!(%name, "screenshot captured");
        Ok(())
    }

    async fn restart_session(&mut self) -> Result<()> {
        if let Some(old) = self.session.take() {
            if let Err(e) = old.close().await {
                warn!(error = %e, "closing the stale session failed");
            }
        }
        self.session = Some(self.launcher.launch().await?);
        info!("browser session restarted");
        Ok(())
    }
}

//! In-memory browser doubles for exercising the scraper without Chrome.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use farescrape::retrieve::{LISTING_SELECTOR, PROGRESS_SELECTOR, RESULTS_SELECTOR, SEARCH_COMPLETE};
use farescrape::{Clock, EvidenceSink, Field};
use farescrape_browser::{BrowserError, Element, Launcher, Session};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

/// One rendered listing: field selector -> text. Missing selectors fail to resolve.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    fields: HashMap<&'static str, String>,
}

impl Listing {
    /// A listing where every field resolves, tagged with `tag`.
    pub fn complete(tag: &str) -> Self {
        let mut listing = Self::default();
        for field in Field::ALL {
            let text = match field {
                Field::DaysLater => "+1".to_string(),
                Field::DepartureAirport => "LIS".to_string(),
                Field::ArrivalAirport => "LGW".to_string(),
                other => format!("{other:?} {tag}"),
            };
            listing.fields.insert(field.selector(), text);
        }
        listing
    }

    /// Removes a field so that its lookup fails.
    pub fn without(mut self, field: Field) -> Self {
        self.fields.remove(field.selector());
        self
    }
}

/// What the site does in response to one navigation.
#[derive(Debug, Clone)]
pub enum PageBehavior {
    /// Navigation itself fails.
    NavigationError,
    /// The page loads but progress text never reads "Search complete".
    NeverCompletes,
    /// The page completes with these standard listings.
    Results(Vec<Listing>),
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub launched: u32,
    pub closed: Vec<u32>,
    /// (session id, url) per navigation
    pub navigations: Vec<(u32, String)>,
    /// session id per screenshot request
    pub screenshots: Vec<u32>,
    pub maximized: Vec<u32>,
}

#[derive(Debug, Default)]
struct World {
    behaviors: VecDeque<PageBehavior>,
    fallback: Option<PageBehavior>,
    screenshot_failures: VecDeque<bool>,
    launch_failures: VecDeque<bool>,
    recorded: Recorded,
}

/// Shared handle to the simulated site and the interaction log.
#[derive(Debug, Clone, Default)]
pub struct MockSite {
    world: Arc<Mutex<World>>,
}

impl MockSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues behaviors for successive navigations.
    pub fn then(self, behavior: PageBehavior) -> Self {
        self.world.lock().unwrap().behaviors.push_back(behavior);
        self
    }

    /// Behavior once the queue is drained.
    pub fn otherwise(self, behavior: PageBehavior) -> Self {
        self.world.lock().unwrap().fallback = Some(behavior);
        self
    }

    /// Queues screenshot outcomes; `true` means the capture fails.
    pub fn screenshot_failures(self, failures: &[bool]) -> Self {
        self.world
            .lock()
            .unwrap()
            .screenshot_failures
            .extend(failures.iter().copied());
        self
    }

    /// Queues launch outcomes; `true` means the launch fails.
    pub fn launch_failures(self, failures: &[bool]) -> Self {
        self.world
            .lock()
            .unwrap()
            .launch_failures
            .extend(failures.iter().copied());
        self
    }

    pub fn launcher(&self) -> MockLauncher {
        MockLauncher { site: self.clone() }
    }

    /// Reads the interaction log.
    pub fn recorded<T>(&self, read: impl FnOnce(&Recorded) -> T) -> T {
        read(&self.world.lock().unwrap().recorded)
    }

    fn next_behavior(&self) -> PageBehavior {
        let mut world = self.world.lock().unwrap();
        world
            .behaviors
            .pop_front()
            .or_else(|| world.fallback.clone())
            .unwrap_or(PageBehavior::Results(Vec::new()))
    }
}

#[derive(Debug, Clone)]
pub struct MockLauncher {
    site: MockSite,
}

#[async_trait]
impl Launcher for MockLauncher {
    type Session = MockSession;

    async fn launch(&self) -> Result<MockSession, BrowserError> {
        let mut world = self.site.world.lock().unwrap();
        if world.launch_failures.pop_front().unwrap_or(false) {
            return Err(BrowserError::LaunchFailed {
                reason: "chrome not found".to_string(),
                source: None,
            });
        }
        world.recorded.launched += 1;
        Ok(MockSession {
            id: world.recorded.launched,
            site: self.site.clone(),
            page: Mutex::new(None),
        })
    }
}

/// A simulated session; `id` counts launches from 1.
#[derive(Debug)]
pub struct MockSession {
    pub id: u32,
    site: MockSite,
    page: Mutex<Option<PageBehavior>>,
}

#[async_trait]
impl Session for MockSession {
    type Element = MockElement;

    async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.site
            .world
            .lock()
            .unwrap()
            .recorded
            .navigations
            .push((self.id, url.to_string()));

        let behavior = self.site.next_behavior();
        if let PageBehavior::NavigationError = behavior {
            return Err(BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: "net::ERR_CONNECTION_RESET".to_string(),
            });
        }
        *self.page.lock().unwrap() = Some(behavior);
        Ok(())
    }

    async fn find_element(&self, selector: &str) -> Result<MockElement, BrowserError> {
        let page = self.page.lock().unwrap().clone();
        match (selector, page) {
            (PROGRESS_SELECTOR, Some(PageBehavior::NeverCompletes)) => {
                Ok(MockElement::Text("Searching 120 of 300 sites".to_string()))
            }
            (PROGRESS_SELECTOR, Some(PageBehavior::Results(_))) => {
                Ok(MockElement::Text(SEARCH_COMPLETE.to_string()))
            }
            (RESULTS_SELECTOR, Some(PageBehavior::Results(listings))) => {
                Ok(MockElement::Board(listings))
            }
            _ => Err(BrowserError::ElementNotFound {
                selector: selector.to_string(),
                reason: "no such element".to_string(),
            }),
        }
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<MockElement>, BrowserError> {
        Ok(self.find_element(selector).await.into_iter().collect())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, BrowserError> {
        let mut world = self.site.world.lock().unwrap();
        world.recorded.screenshots.push(self.id);
        if world.screenshot_failures.pop_front().unwrap_or(false) {
            return Err(BrowserError::ScreenshotFailed(
                "target closed".to_string(),
            ));
        }
        Ok(b"\x89PNG\r\n\x1a\n".to_vec())
    }

    async fn maximize(&self) -> Result<(), BrowserError> {
        self.site
            .world
            .lock()
            .unwrap()
            .recorded
            .maximized
            .push(self.id);
        Ok(())
    }

    async fn close(self) -> Result<(), BrowserError> {
        self.site.world.lock().unwrap().recorded.closed.push(self.id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum MockElement {
    Text(String),
    Board(Vec<Listing>),
    Listing(Listing),
    /// A listing whose field lookups succeed but whose text cannot be read.
    Unreadable,
}

impl MockElement {
    pub fn listing(listing: Listing) -> Self {
        Self::Listing(listing)
    }

    fn missing(selector: &str) -> BrowserError {
        BrowserError::ElementNotFound {
            selector: selector.to_string(),
            reason: "no such element".to_string(),
        }
    }
}

#[async_trait]
impl Element for MockElement {
    async fn find_element(&self, selector: &str) -> Result<Self, BrowserError> {
        match self {
            Self::Listing(listing) => listing
                .fields
                .get(selector)
                .map(|text| Self::Text(text.clone()))
                .ok_or_else(|| Self::missing(selector)),
            Self::Unreadable => Ok(Self::Unreadable),
            _ => Err(Self::missing(selector)),
        }
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<Self>, BrowserError> {
        match self {
            Self::Board(listings) if selector == LISTING_SELECTOR => {
                Ok(listings.iter().cloned().map(Self::Listing).collect())
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn text(&self) -> Result<String, BrowserError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Unreadable => Err(BrowserError::TextUnavailable("detached node".to_string())),
            _ => Ok(String::new()),
        }
    }
}

/// Records screenshot names instead of writing files.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    names: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[async_trait]
impl EvidenceSink for RecordingSink {
    async fn write_screenshot(&self, name: &str, _png: &[u8]) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.names.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

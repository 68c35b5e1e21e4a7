//! Automation-session abstractions.
//!
//! The scraping core only talks to these traits. [`crate::ChromeLauncher`]
//! provides the real implementation; tests supply in-memory doubles.

use crate::error::Result;
use async_trait::async_trait;

/// A DOM element handle that can be queried further.
#[async_trait]
pub trait Element: Send + Sync + Sized {
    /// Finds the first descendant matching a CSS selector.
    async fn find_element(&self, selector: &str) -> Result<Self>;

    /// Finds all descendants matching a CSS selector, in document order.
    async fn find_elements(&self, selector: &str) -> Result<Vec<Self>>;

    /// Returns the rendered text of the element.
    async fn text(&self) -> Result<String>;
}

/// A live automation session: one browser with one active page.
#[async_trait]
pub trait Session: Send + Sync + Sized {
    /// Element handle type produced by this session.
    type Element: Element;

    /// Navigates the page to an absolute URL and waits for the document to load.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Finds the first element in the page matching a CSS selector.
    async fn find_element(&self, selector: &str) -> Result<Self::Element>;

    /// Finds all elements in the page matching a CSS selector, in document order.
    async fn find_elements(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Captures a full-page PNG screenshot.
    async fn screenshot(&self) -> Result<Vec<u8>>;

    /// Maximizes the browser window.
    async fn maximize(&self) -> Result<()>;

    /// Tears the session down. The session cannot be used afterwards.
    async fn close(self) -> Result<()>;
}

/// Starts fresh automation sessions.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Session type produced by this launcher.
    type Session: Session;

    /// Launches a new session with no state carried over from earlier ones.
    async fn launch(&self) -> Result<Self::Session>;
}

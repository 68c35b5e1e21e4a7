//! Page-level browser operations and element handles.

use crate::error::{BrowserError, Result};
use crate::session::Element;
use crate::wait::{WaitConfig, wait_for_result};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::browser::{
    Bounds, GetWindowForTargetParams, SetWindowBoundsParams, WindowState,
};
use chromiumoxide::element::Element as ChromeNode;
use chromiumoxide::page::{Page as RawPage, ScreenshotParams};
use std::sync::Arc;

/// A browser tab with navigation, DOM lookup and capture helpers.
#[derive(Debug, Clone)]
pub struct ChromePage {
    inner: Arc<RawPage>,
}

impl ChromePage {
    pub(crate) fn new(page: RawPage) -> Self {
        Self {
            inner: Arc::new(page),
        }
    }

    /// Navigates to an absolute URL and waits for the document to be ready.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or `WaitTimeout`
    /// if the document never reaches the `complete` ready state.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(WaitConfig::default()).await
    }

    /// Waits for `document.readyState` to become `complete`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait times out.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok(result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete"))
                }
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page context and deserializes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be deserialized.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Finds the first element matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` when nothing matches.
    pub async fn find_element(&self, selector: &str) -> Result<ChromeElement> {
        self.inner
            .find_element(selector)
            .await
            .map(ChromeElement::new)
            .map_err(|e| not_found(selector, &e))
    }

    /// Finds all elements matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM query itself fails.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<ChromeElement>> {
        self.inner
            .find_elements(selector)
            .await
            .map(|nodes| nodes.into_iter().map(ChromeElement::new).collect())
            .map_err(|e| not_found(selector, &e))
    }

    /// Takes a full-page screenshot and returns PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `ScreenshotFailed` if capture fails.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
            .map_err(|e| BrowserError::ScreenshotFailed(e.to_string()))
    }

    /// Maximizes the window that hosts this page.
    ///
    /// # Errors
    ///
    /// Returns an error if either CDP command fails.
    pub async fn maximize(&self) -> Result<()> {
        let window = self
            .inner
            .execute(GetWindowForTargetParams::default())
            .await?;
        let bounds = Bounds::builder()
            .window_state(WindowState::Maximized)
            .build();
        self.inner
            .execute(SetWindowBoundsParams::new(
                window.result.window_id.clone(),
                bounds,
            ))
            .await?;
        Ok(())
    }
}

/// An element handle inside a [`ChromePage`].
#[derive(Debug)]
pub struct ChromeElement {
    inner: ChromeNode,
}

impl ChromeElement {
    fn new(inner: ChromeNode) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Element for ChromeElement {
    async fn find_element(&self, selector: &str) -> Result<Self> {
        self.inner
            .find_element(selector)
            .await
            .map(Self::new)
            .map_err(|e| not_found(selector, &e))
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<Self>> {
        self.inner
            .find_elements(selector)
            .await
            .map(|nodes| nodes.into_iter().map(Self::new).collect())
            .map_err(|e| not_found(selector, &e))
    }

    async fn text(&self) -> Result<String> {
        self.inner
            .inner_text()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|e| BrowserError::TextUnavailable(e.to_string()))
    }
}

fn not_found(selector: &str, error: &chromiumoxide::error::CdpError) -> BrowserError {
    BrowserError::ElementNotFound {
        selector: selector.to_string(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_selector() {
        let err = not_found(
            "#results-tickets",
            &chromiumoxide::error::CdpError::NotFound,
        );
        match err {
            BrowserError::ElementNotFound { selector, .. } => {
                assert_eq!(selector, "#results-tickets");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

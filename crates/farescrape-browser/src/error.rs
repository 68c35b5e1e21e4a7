//! Error types for browser automation operations.
//!
//! The variants separate launch failures, navigation errors, timeouts and DOM
//! lookups so that callers can log what went wrong. The scraping core treats
//! every variant as a session fault.

use std::time::Duration;
use thiserror::Error;

/// The main error type for all browser automation operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch the browser process.
    ///
    /// This typically occurs when Chrome/Chromium is not installed,
    /// or when there are permission issues with the executable.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish Chrome DevTools Protocol connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// No element matched a CSS selector.
    #[error("no element matches selector '{selector}': {reason}")]
    ElementNotFound {
        /// The selector that was queried
        selector: String,
        /// Driver message
        reason: String,
    },

    /// Reading the text of an element failed.
    #[error("failed to read element text: {0}")]
    TextUnavailable(String),

    /// JavaScript execution in the page context failed.
    #[error("JavaScript execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// Screenshot capture failed.
    #[error("screenshot capture failed: {0}")]
    ScreenshotFailed(String),

    /// An operation needed a session but none has been started.
    #[error("browser session has not been started")]
    NotStarted,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Filesystem errors, such as removing a session's profile directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;

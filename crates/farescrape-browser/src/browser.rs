//! Browser lifecycle management and process control.
//!
//! [`ChromeLauncher`] spawns Chrome and hands out [`ChromeSession`]s, each
//! owning one browser process with a single page. Sessions are closed
//! explicitly via [`Session::close`]; dropping one without closing falls back
//! to chromiumoxide's Drop, which kills the process.

use crate::error::{BrowserError, Result};
use crate::page::{ChromeElement, ChromePage};
use crate::session::{Launcher, Session};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Configuration for launching Chrome.
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    /// Run in headless mode (default: true).
    pub headless: bool,

    /// Browser window size (default: 1920x1080).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<String>,
}

impl ChromeConfig {
    /// Creates a new config with defaults for headless scraping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables visible mode for debugging.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Sets the Chrome executable path.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    fn to_browser_config(&self, user_data_dir: &Path) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        if self.headless && !cfg!(feature = "visible") {
            config = config.arg("--headless");
        } else {
            config = config.with_head();
        }

        config = config.arg(format!(
            "--window-size={},{}",
            self.window_size.0, self.window_size.1
        ));

        config = config.arg(format!("--user-data-dir={}", user_data_dir.display()));

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path.clone());
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            args: vec![
                // Required when user namespaces are unavailable (containers).
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containerized environments
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
        }
    }
}

/// A fresh profile directory for one launch.
///
/// A restarted session must not inherit profile state from the previous one.
fn new_profile_dir() -> PathBuf {
    std::env::temp_dir().join(format!("farescrape-{}", uuid::Uuid::new_v4()))
}

/// Removes a session's profile directory. A directory Chrome never created
/// is not an error.
async fn remove_profile_dir(dir: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

/// Launches Chrome-backed sessions from a fixed [`ChromeConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChromeLauncher {
    config: ChromeConfig,
}

impl ChromeLauncher {
    /// Creates a launcher for the given configuration.
    #[must_use]
    pub fn new(config: ChromeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Launcher for ChromeLauncher {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession> {
        debug!("Launching browser with config: {:?}", self.config);

        let profile_dir = new_profile_dir();
        let browser_config = self.config.to_browser_config(&profile_dir)?;

        let (browser, mut handler) = match Browser::launch(browser_config).await {
            Ok(launched) => launched,
            Err(e) => {
                if let Err(cleanup) = remove_profile_dir(&profile_dir).await {
                    warn!(error = %cleanup, "failed to remove profile directory");
                }
                return Err(BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        };

        // chromiumoxide only processes CDP events while the handler is polled
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {}", e);
                }
            }
        });

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        debug!("Browser launched successfully");

        Ok(ChromeSession {
            browser,
            page: ChromePage::new(chrome_page),
            handler_task,
            profile_dir,
        })
    }
}

/// A running Chrome process with one page.
///
/// Closing the session also deletes its profile directory.
pub struct ChromeSession {
    browser: Browser,
    page: ChromePage,
    handler_task: JoinHandle<()>,
    profile_dir: PathBuf,
}

impl ChromeSession {
    /// Returns the active page.
    #[must_use]
    pub fn page(&self) -> &ChromePage {
        &self.page
    }
}

#[async_trait]
impl Session for ChromeSession {
    type Element = ChromeElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.page.navigate(url).await
    }

    async fn find_element(&self, selector: &str) -> Result<ChromeElement> {
        self.page.find_element(selector).await
    }

    async fn find_elements(&self, selector: &str) -> Result<Vec<ChromeElement>> {
        self.page.find_elements(selector).await
    }

    async fn screenshot(&self) -> Result<Vec<u8>> {
        self.page.screenshot().await
    }

    async fn maximize(&self) -> Result<()> {
        self.page.maximize().await
    }

    async fn close(self) -> Result<()> {
        let Self {
            mut browser,
            page,
            handler_task,
            profile_dir,
        } = self;

        debug!("Closing browser gracefully");
        drop(page);
        let closed = browser
            .close()
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()));
        if let Err(e) = browser.wait().await {
            warn!("Waiting for Chrome process exit failed: {}", e);
        }
        handler_task.abort();

        // removed even when the close command failed
        let removed = remove_profile_dir(&profile_dir).await;
        closed?;
        removed?;
        debug!(dir = %profile_dir.display(), "removed profile directory");
        Ok(())
    }
}

//! Settings structures and their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// All farescrape settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scrape: ScrapeSettings,
    pub browser: BrowserSettings,
    pub evidence: EvidenceSettings,
}

/// How searches are issued and retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub currency: String,
    /// chrono format for the searched date.
    pub date_format: String,
    pub direct_flight: bool,
    pub maximize: bool,
    /// Time allowed for the search to report completion.
    pub timeout_ms: u64,
    /// Retries after the first attempt.
    pub retries: u32,
    pub poll_interval_ms: u64,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            base_url: "http://www.momondo.co.uk".to_string(),
            currency: "EUR".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            direct_flight: false,
            maximize: false,
            timeout_ms: 80_000,
            retries: 1,
            poll_interval_ms: 500,
        }
    }
}

impl ScrapeSettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Chrome launch options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    /// Extra command-line arguments passed to Chrome.
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            args: Vec::new(),
            chrome_path: None,
        }
    }
}

/// Where failure screenshots go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceSettings {
    pub screenshot_dir: PathBuf,
}

impl Default for EvidenceSettings {
    fn default() -> Self {
        Self {
            screenshot_dir: PathBuf::from("screenshots"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_come_from_milliseconds() {
        let scrape = ScrapeSettings {
            timeout_ms: 1_500,
            poll_interval_ms: 20,
            ..ScrapeSettings::default()
        };
        assert_eq!(scrape.timeout(), Duration::from_millis(1_500));
        assert_eq!(scrape.poll_interval(), Duration::from_millis(20));
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[scrape]
retries = 4

[browser]
headless = false
"#,
        )
        .unwrap();

        assert_eq!(settings.scrape.retries, 4);
        assert_eq!(settings.scrape.currency, "EUR");
        assert!(!settings.browser.headless);
        assert_eq!(settings.browser.window_width, 1920);
        assert_eq!(settings.evidence, EvidenceSettings::default());
    }
}

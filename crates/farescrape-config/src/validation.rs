use crate::error::{ConfigError, Result};
use crate::settings::Settings;

impl Settings {
    /// Validate settings for logical consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let scrape = &self.scrape;

        if scrape.currency.trim().is_empty() {
            return Err(ConfigError::invalid(
                "scrape.currency",
                "\"\"",
                "Currency code cannot be empty",
            ));
        }

        if scrape.date_format.is_empty() {
            return Err(ConfigError::invalid(
                "scrape.date_format",
                "\"\"",
                "Use a chrono format such as %d-%m-%Y",
            ));
        }

        if !(scrape.base_url.starts_with("http://") || scrape.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "scrape.base_url",
                &scrape.base_url,
                "Must be an http:// or https:// URL",
            ));
        }

        if scrape.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "scrape.timeout_ms",
                scrape.timeout_ms,
                "Timeout must be greater than zero",
            ));
        }

        if scrape.poll_interval_ms == 0 || scrape.poll_interval_ms > scrape.timeout_ms {
            return Err(ConfigError::invalid(
                "scrape.poll_interval_ms",
                scrape.poll_interval_ms,
                format!("Must be between 1 and timeout_ms ({})", scrape.timeout_ms),
            ));
        }

        if self.browser.window_width == 0 || self.browser.window_height == 0 {
            return Err(ConfigError::invalid(
                "browser.window_width/window_height",
                format!(
                    "{}x{}",
                    self.browser.window_width, self.browser.window_height
                ),
                "Window dimensions must be non-zero",
            ));
        }

        Ok(())
    }
}

//! Diagnostic screenshots taken when an attempt fails.

use crate::types::Route;
use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Default directory screenshots are written to.
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Source of the timestamp embedded in screenshot names.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Names a screenshot `{DD-MM-YYYY_HH_mm}_{from}_{to}_{YYYY-MM-DD}.png`.
#[must_use]
pub fn screenshot_name(now: NaiveDateTime, route: &Route, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}_{}.png",
        now.format("%d-%m-%Y_%H_%M"),
        route.from,
        route.to,
        date.format("%Y-%m-%d")
    )
}

/// Stores captured screenshots.
#[async_trait]
pub trait EvidenceSink: Send + Sync {
    /// Persists `png` under `name`.
    async fn write_screenshot(&self, name: &str, png: &[u8]) -> io::Result<()>;
}

/// Writes screenshots into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FsEvidenceSink {
    dir: PathBuf,
}

impl FsEvidenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for FsEvidenceSink {
    fn default() -> Self {
        Self::new(DEFAULT_SCREENSHOT_DIR)
    }
}

#[async_trait]
impl EvidenceSink for FsEvidenceSink {
    async fn write_screenshot(&self, name: &str, png: &[u8]) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, png).await?;
        debug!(path = %path.display(), "screenshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_embeds_timestamp_route_and_date() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(9, 7, 42)
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let name = screenshot_name(now, &Route::new("LIS", "LON"), date);

        assert_eq!(name, "20-05-2024_09_07_LIS_LON_2024-06-01.png");
    }

    #[tokio::test]
    async fn fs_sink_creates_directory_and_writes() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("screenshots");
        let sink = FsEvidenceSink::new(&dir);

        sink.write_screenshot("shot.png", b"\x89PNG").await.unwrap();

        let written = std::fs::read(dir.join("shot.png")).unwrap();
        assert_eq!(written, b"\x89PNG");
    }

    #[tokio::test]
    async fn fs_sink_reports_unwritable_target() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let sink = FsEvidenceSink::new(blocker.join("screenshots"));

        assert!(sink.write_screenshot("shot.png", b"png").await.is_err());
    }
}

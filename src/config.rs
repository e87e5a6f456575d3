use std::path::PathBuf;
use std::time::Duration;

/// Delays and intervals used throughout a run.
///
/// These encode environment-specific tuning (network latency, how fast the
/// gallery hydrates lazily loaded rows) and can be overridden from the CLI.
#[derive(Debug, Clone)]
pub struct Timings {
    /// Wait after the gallery grid first renders, before collection starts.
    pub initial_settle: Duration,
    /// Wait before each visibility read, so lazily loaded rows can appear.
    pub scroll_settle: Duration,
    /// Delay between consecutive download triggers.
    pub pacing: Duration,
    /// Interval between completion polls of the download directory.
    pub poll: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            initial_settle: Duration::from_secs(2),
            scroll_settle: Duration::from_secs(1),
            pacing: Duration::from_secs(1),
            poll: Duration::from_secs(1),
        }
    }
}

/// Everything needed for one end-to-end run.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Directory the browser writes finished downloads into.
    pub download_dir: PathBuf,
    /// Public share token identifying the gallery.
    pub share_id: String,
    /// WebDriver endpoint of a running chromedriver.
    pub webdriver_url: String,
    /// Run the browser without a visible window.
    pub headless: bool,
    pub timings: Timings,
}

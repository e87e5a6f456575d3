//! # lightroom-dl-rs
//!
//! Downloads every photo from a public Adobe Lightroom share.
//!
//! Lightroom share galleries render lazily while scrolling, so the crate
//! first scrolls through the whole grid to enumerate every asset id, then
//! triggers a browser-native download per asset and waits for the browser
//! to finish writing the files:
//!
//! 1. [`session::GallerySession`] starts a Chrome session via chromedriver
//!    and opens the share's gallery page.
//! 2. [`collector::collect_item_ids`] scrolls in half-viewport steps until
//!    the page reports the end of content, collecting each asset id once.
//! 3. [`download::trigger_downloads`] navigates to each asset's direct URL
//!    in discovery order; the navigations are intercepted by the browser's
//!    download manager and written into the target directory.
//! 4. [`watcher::wait_for_downloads`] polls that directory until no
//!    in-progress temporary files remain.
//!
//! ```no_run
//! use lightroom_dl_rs::{download, DownloadOptions, Timings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     download(&DownloadOptions {
//!         download_dir: "./photos".into(),
//!         share_id: "abc123".into(),
//!         webdriver_url: "http://localhost:9515".into(),
//!         headless: true,
//!         timings: Timings::default(),
//!     })
//!     .await
//! }
//! ```

use anyhow::Result;
use log::info;

pub mod collector;
pub mod config;
pub mod download;
pub mod page;
pub mod session;
pub mod watcher;

pub use config::{DownloadOptions, Timings};
pub use session::GallerySession;

/// Runs one complete download pass over a share.
///
/// Any failure (webdriver unreachable, gallery never renders, download
/// directory unreadable) aborts the run; individual asset downloads are not
/// retried or confirmed per item.
pub async fn download(options: &DownloadOptions) -> Result<()> {
    let session = GallerySession::connect(&options.webdriver_url, options.headless).await?;
    session
        .open_share(&options.share_id, options.timings.initial_settle)
        .await?;

    let page = session.page();
    info!("collecting gallery items...");
    let item_ids = collector::collect_item_ids(&page, options.timings.scroll_settle).await?;
    info!("found {} items", item_ids.len());

    session.redirect_downloads_to(&options.download_dir).await?;
    download::trigger_downloads(&page, &options.share_id, &item_ids, options.timings.pacing)
        .await?;

    info!("waiting for downloads to finish...");
    watcher::wait_for_downloads(&options.download_dir, options.timings.poll).await?;

    session.quit().await
}

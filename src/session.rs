use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use serde_json::json;
use thirtyfour::extensions::cdp::ChromeDevTools;
use thirtyfour::{prelude::*, By, DesiredCapabilities, WebDriver};
use tokio::fs;
use tokio::time::sleep;

use crate::page::{LightroomPage, ITEM_SELECTOR};

const SHARE_URL_BASE: &str = "https://lightroom.adobe.com/shares";

/// One browser session pointed at a Lightroom share.
///
/// Owns the WebDriver lifecycle: capability setup, navigation to the
/// gallery, download-interception configuration and teardown.
pub struct GallerySession {
    driver: WebDriver,
}

impl GallerySession {
    /// Connects to a running chromedriver at `webdriver_url`.
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_no_sandbox()?;
        caps.set_disable_dev_shm_usage()?;
        if headless {
            caps.set_headless()?;
        }

        info!("connecting to webdriver at {webdriver_url}");
        let driver = WebDriver::new(webdriver_url, caps)
            .await
            .with_context(|| format!("could not start a browser session via {webdriver_url}"))?;
        Ok(Self { driver })
    }

    /// Opens the share's gallery page and waits for the grid to render.
    pub async fn open_share(&self, share_id: &str, initial_settle: Duration) -> Result<()> {
        let url = format!("{SHARE_URL_BASE}/{share_id}");
        info!("opening gallery {url}");
        self.driver
            .goto(&url)
            .await
            .context("could not navigate to the share page")?;
        self.driver
            .query(By::Css(ITEM_SELECTOR))
            .first()
            .await
            .context("gallery grid never appeared; check the share id")?;
        sleep(initial_settle).await;
        Ok(())
    }

    /// Creates `download_dir` and redirects all downloads into it instead of
    /// rendering them, via the `Page.setDownloadBehavior` DevTools command.
    pub async fn redirect_downloads_to(&self, download_dir: &Path) -> Result<()> {
        fs::create_dir_all(download_dir).await.with_context(|| {
            format!("could not create download directory {}", download_dir.display())
        })?;
        // Chrome requires an absolute download path.
        let download_dir = download_dir
            .canonicalize()
            .context("could not resolve the download directory to an absolute path")?;

        let dev_tools = ChromeDevTools::new(self.driver.handle.clone());
        dev_tools
            .execute_cdp_with_params(
                "Page.setDownloadBehavior",
                json!({
                    "behavior": "allow",
                    "downloadPath": download_dir.display().to_string(),
                }),
            )
            .await
            .context("could not configure download interception")?;
        Ok(())
    }

    /// Handle on the gallery page for the collector and download driver.
    pub fn page(&self) -> LightroomPage {
        LightroomPage::new(self.driver.clone())
    }

    pub async fn quit(self) -> Result<()> {
        self.driver
            .quit()
            .await
            .context("failed to close the browser session")
    }
}

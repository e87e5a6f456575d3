use anyhow::{ensure, Context, Result};
use serde_json::json;
use thirtyfour::WebDriver;

/// CSS selector matching one rendered gallery item.
pub const ITEM_SELECTOR: &str = ".image";

/// The operations the collector and download driver need from the gallery
/// page. Implemented against a real browser by [`LightroomPage`]; tests use
/// a scripted stand-in, so the scroll/end-of-content heuristic can be
/// exercised without a WebDriver session.
#[allow(async_fn_in_trait)]
pub trait GalleryPage {
    /// Current viewport height in pixels. Used to size scroll steps.
    async fn viewport_height(&self) -> Result<u32>;

    /// Identifiers of all items currently present in the rendered document.
    /// Repeated calls may return overlapping sets; may be empty before the
    /// first rows hydrate.
    async fn visible_item_ids(&self) -> Result<Vec<String>>;

    /// Scroll down by `step` pixels and report whether the end of the
    /// scrollable content has been reached. Must err on the side of "not at
    /// end": one extra pass is harmless, a premature `true` truncates the
    /// collected set.
    async fn scroll_and_check_end(&self, step: u32) -> Result<bool>;

    /// Navigate to `url`. The navigation is expected to be intercepted by
    /// the browser's download manager, never to render a page.
    async fn trigger_download(&self, url: &str) -> Result<()>;
}

/// Production [`GalleryPage`] over a Lightroom share grid. All probe
/// operations are injected JavaScript; the item identifier is the `id`
/// attribute of each element matching [`ITEM_SELECTOR`].
pub struct LightroomPage {
    driver: WebDriver,
}

impl LightroomPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl GalleryPage for LightroomPage {
    async fn viewport_height(&self) -> Result<u32> {
        let ret = self
            .driver
            .execute("return window.innerHeight;", vec![])
            .await
            .context("failed to read viewport height")?;
        let height: f64 = serde_json::from_value(ret.json().clone())
            .context("viewport height was not a number")?;
        ensure!(height >= 1.0, "viewport height was {height}");
        Ok(height as u32)
    }

    async fn visible_item_ids(&self) -> Result<Vec<String>> {
        let script = format!(
            "return Array.from(document.querySelectorAll('{ITEM_SELECTOR}'))\
                 .map((el) => el.id)\
                 .filter((id) => id.length > 0);"
        );
        let ret = self
            .driver
            .execute(&script, vec![])
            .await
            .context("failed to read visible item ids")?;
        serde_json::from_value(ret.json().clone())
            .context("item id query did not return a list of strings")
    }

    async fn scroll_and_check_end(&self, step: u32) -> Result<bool> {
        let script = "window.scrollBy(0, arguments[0]);\
                      return window.scrollY + window.innerHeight >= document.body.scrollHeight;";
        let ret = self
            .driver
            .execute(script, vec![json!(step)])
            .await
            .context("failed to scroll the gallery")?;
        serde_json::from_value(ret.json().clone())
            .context("scroll boundary check did not return a boolean")
    }

    async fn trigger_download(&self, url: &str) -> Result<()> {
        self.driver
            .execute("location.href = arguments[0];", vec![json!(url)])
            .await
            .with_context(|| format!("failed to trigger download navigation to {url}"))?;
        Ok(())
    }
}

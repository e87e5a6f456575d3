use std::time::Duration;

use anyhow::Result;
use log::info;
use tokio::time::sleep;

use crate::page::GalleryPage;

/// Host serving the raw assets behind a share.
const ASSET_HOST: &str = "https://dl.lightroom.adobe.com";

/// Direct retrieval URL for one asset within a share.
pub fn build_asset_url(share_id: &str, asset_id: &str) -> String {
    format!("{ASSET_HOST}/spaces/{share_id}/assets/{asset_id}")
}

/// Triggers a browser download for every asset, one at a time, in the order
/// given, pausing `pacing` between triggers.
///
/// Fire-and-forget per item: no per-item confirmation is collected here, and
/// downloads may still be in flight when this returns. Completion is
/// verified afterwards by [`crate::watcher::wait_for_downloads`].
pub async fn trigger_downloads<P: GalleryPage>(
    page: &P,
    share_id: &str,
    asset_ids: &[String],
    pacing: Duration,
) -> Result<()> {
    for asset_id in asset_ids {
        let url = build_asset_url(share_id, asset_id);
        info!("starting download of asset {asset_id}");
        page.trigger_download(&url).await?;
        sleep(pacing).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::collect_item_ids;
    use crate::page::testing::ScriptedPage;

    #[test]
    fn builds_the_asset_url_by_plain_substitution() {
        assert_eq!(
            build_asset_url("abc123", "item42"),
            "https://dl.lightroom.adobe.com/spaces/abc123/assets/item42"
        );
    }

    #[tokio::test]
    async fn triggers_one_navigation_per_asset_in_order() {
        let page = ScriptedPage::new(800, 1, &[]);
        let ids = ["i1", "i2", "i3"].map(String::from);
        trigger_downloads(&page, "share", &ids, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(
            *page.navigations.lock().unwrap(),
            [
                "https://dl.lightroom.adobe.com/spaces/share/assets/i1",
                "https://dl.lightroom.adobe.com/spaces/share/assets/i2",
                "https://dl.lightroom.adobe.com/spaces/share/assets/i3",
            ]
        );
    }

    #[tokio::test]
    async fn collects_then_downloads_in_discovery_order() {
        let page = ScriptedPage::new(800, 2, &[&["i1", "i2"], &["i1", "i2"], &["i2", "i3"]]);
        let ids = collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(ids, ["i1", "i2", "i3"]);

        trigger_downloads(&page, "s1", &ids, Duration::ZERO)
            .await
            .unwrap();
        let navigations = page.navigations.lock().unwrap();
        assert_eq!(navigations.len(), 3);
        assert!(navigations[0].ends_with("/assets/i1"));
        assert!(navigations[1].ends_with("/assets/i2"));
        assert!(navigations[2].ends_with("/assets/i3"));
    }

    #[tokio::test]
    async fn empty_collection_triggers_nothing() {
        let page = ScriptedPage::new(800, 1, &[]);
        trigger_downloads(&page, "share", &[], Duration::ZERO)
            .await
            .unwrap();
        assert!(page.navigations.lock().unwrap().is_empty());
    }
}

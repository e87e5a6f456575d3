use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use log::debug;
use tokio::time::sleep;

use crate::page::GalleryPage;

/// Scrolls through the whole gallery and returns every item id exactly once,
/// in first-seen order.
///
/// Each pass waits `settle` for lazily loaded rows, reads the visible ids,
/// then scrolls down by half a viewport and asks the page whether the end
/// has been reached. The end signal only takes effect after one more
/// visibility read, so the batch revealed by the final scroll is still
/// captured.
pub async fn collect_item_ids<P: GalleryPage>(page: &P, settle: Duration) -> Result<Vec<String>> {
    let scroll_size = page.viewport_height().await?.div_ceil(2);
    debug!("scrolling in steps of {scroll_size}px");

    let mut seen: HashSet<String> = HashSet::new();
    let mut item_ids: Vec<String> = Vec::new();
    let mut reached_end = false;

    loop {
        sleep(settle).await;
        for id in page.visible_item_ids().await? {
            if seen.insert(id.clone()) {
                item_ids.push(id);
            }
        }
        if reached_end {
            break;
        }
        reached_end = page.scroll_and_check_end(scroll_size).await?;
    }

    Ok(item_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::ScriptedPage;

    #[tokio::test]
    async fn deduplicates_across_overlapping_reads() {
        let page = ScriptedPage::new(800, 2, &[&["a", "b"], &["b", "c"], &["c"]]);
        let ids = collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn preserves_first_seen_order() {
        let page = ScriptedPage::new(800, 2, &[&["b", "a"], &["c", "a"], &[]]);
        let ids = collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[tokio::test]
    async fn reads_once_more_after_the_end_signal() {
        let page = ScriptedPage::new(800, 3, &[]);
        collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(page.steps().len(), 3);
        assert_eq!(page.reads(), 4);
    }

    #[tokio::test]
    async fn captures_the_batch_revealed_by_the_final_scroll() {
        let page = ScriptedPage::new(800, 1, &[&["a"], &["b"]]);
        let ids = collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn scroll_step_is_half_the_viewport_rounded_up() {
        let page = ScriptedPage::new(999, 1, &[]);
        collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert_eq!(page.steps(), [500]);
    }

    #[tokio::test]
    async fn empty_gallery_yields_no_ids() {
        let page = ScriptedPage::new(800, 1, &[]);
        let ids = collect_item_ids(&page, Duration::ZERO).await.unwrap();
        assert!(ids.is_empty());
    }
}

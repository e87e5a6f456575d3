use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use tokio::fs;
use tokio::time::sleep;

/// Temporary extensions the browser gives downloads still being written.
const IN_PROGRESS_EXTENSIONS: &[&str] = &["crdownload", "part"];

fn is_in_progress(file_name: &OsStr) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IN_PROGRESS_EXTENSIONS.contains(&ext))
}

async fn count_in_progress(download_dir: &Path) -> Result<usize> {
    let mut entries = fs::read_dir(download_dir)
        .await
        .with_context(|| format!("could not list download directory {}", download_dir.display()))?;
    let mut pending = 0;
    while let Some(entry) = entries.next_entry().await? {
        if is_in_progress(&entry.file_name()) {
            pending += 1;
        }
    }
    Ok(pending)
}

/// Blocks until the download directory holds no in-progress artifacts,
/// checking every `poll`.
///
/// A directory with no temporary entries resolves on the first check, so a
/// run where nothing was ever triggered finishes immediately. A download
/// that hangs forever keeps this waiting forever; there is no timeout.
pub async fn wait_for_downloads(download_dir: &Path, poll: Duration) -> Result<()> {
    loop {
        let pending = count_in_progress(download_dir).await?;
        if pending == 0 {
            return Ok(());
        }
        debug!("{pending} downloads still in progress");
        sleep(poll).await;
    }
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use lightroom_dl_rs::{download, DownloadOptions, Timings};

/// Download every photo from a public Adobe Lightroom share.
///
/// Needs a running chromedriver (default: http://localhost:9515).
#[derive(Parser)]
#[command(name = "lightroom-dl", version, about)]
struct Args {
    /// Directory the downloaded photos are written into.
    download_dir: PathBuf,

    /// Share token from the gallery URL (lightroom.adobe.com/shares/<token>).
    share_id: String,

    /// WebDriver endpoint of a running chromedriver.
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver_url: String,

    /// Run the browser without a visible window.
    #[arg(long)]
    headless: bool,

    /// Milliseconds to wait for lazily loaded rows before each scroll step.
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,

    /// Milliseconds between download triggers.
    #[arg(long, default_value_t = 1000)]
    pacing_ms: u64,

    /// Milliseconds between completion polls of the download directory.
    #[arg(long, default_value_t = 1000)]
    poll_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let timings = Timings {
        scroll_settle: Duration::from_millis(args.settle_ms),
        pacing: Duration::from_millis(args.pacing_ms),
        poll: Duration::from_millis(args.poll_ms),
        ..Timings::default()
    };

    download(&DownloadOptions {
        download_dir: args.download_dir,
        share_id: args.share_id,
        webdriver_url: args.webdriver_url,
        headless: args.headless,
        timings,
    })
    .await
}

// imgscrape: download a bounded set of image search results for one query
// into <output-dir>/<query>/<country>/<theme>/{images,metadata}.

use anyhow::{Result, anyhow};
use clap::Parser;
use imgscrape::{DownloadOptions, DownloadOutcome, FilterShorthand, download};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "imgscrape", version, about = "Download image search results with metadata")]
struct Cli {
    /// Search query
    query: String,

    /// Number of images to download
    #[arg(short, long, default_value_t = imgscrape::utils::DEFAULT_LIMIT)]
    limit: usize,

    /// Root directory; images go under <output-dir>/<query>
    #[arg(short, long, default_value = "dataset")]
    output_dir: PathBuf,

    /// Keep the search engine's adult filter on
    #[arg(long)]
    adult_filter_on: bool,

    /// Delete an existing target directory instead of skipping the query
    #[arg(long)]
    force_replace: bool,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = imgscrape::utils::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Result filter: line, photo, clipart, gif or transparent
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Resize every image to WIDTHxHEIGHT and save it as PNG
    #[arg(long, value_parser = parse_dimensions)]
    resize: Option<(u32, u32)>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    theme: Option<String>,

    /// Only log warnings and the final summary
    #[arg(short, long)]
    quiet: bool,
}

fn parse_dimensions(raw: &str) -> Result<(u32, u32)> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{raw}'"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let options = DownloadOptions {
        limit: cli.limit,
        output_dir: cli.output_dir,
        adult_filter_off: !cli.adult_filter_on,
        force_replace: cli.force_replace,
        timeout_secs: cli.timeout,
        filter: FilterShorthand::from_shorthand(&cli.filter),
        resize: cli.resize,
        verbose: !cli.quiet,
        country: cli.country,
        theme: cli.theme,
        ..DownloadOptions::default()
    };

    match download(&cli.query, options).await? {
        DownloadOutcome::Skipped(dir) => {
            tracing::info!(dir = %dir.display(), "Nothing to do");
        }
        DownloadOutcome::Completed { target_dir, summary } => {
            tracing::info!(
                dir = %target_dir.display(),
                downloaded = summary.downloaded(),
                pages = summary.pages_crawled,
                stop_reason = ?summary.stop_reason,
                "Finished"
            );
        }
    }

    Ok(())
}

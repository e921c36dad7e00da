//! One-call download entrypoint
//!
//! Wraps a crawl run with the target directory policy: images for a query go
//! to `<output_dir>/<query>`, an existing target directory is skipped unless
//! `force_replace` is set, in which case it is removed first.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::RunConfig;
use crate::crawl_engine::{CrawlSummary, ImageCrawler};
use crate::image_search::FilterShorthand;
use crate::utils::{DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS, SEARCH_ENDPOINT};

/// Options for [`download`]
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub limit: usize,
    pub output_dir: PathBuf,
    pub adult_filter_off: bool,
    pub force_replace: bool,
    pub timeout_secs: u64,
    pub filter: Option<FilterShorthand>,
    pub resize: Option<(u32, u32)>,
    pub verbose: bool,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub search_endpoint: String,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            output_dir: PathBuf::from("dataset"),
            adult_filter_off: true,
            force_replace: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            filter: None,
            resize: None,
            verbose: true,
            country: None,
            theme: None,
            search_endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }
}

/// What [`download`] did
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The target directory already existed; nothing was downloaded
    Skipped(PathBuf),
    /// A crawl ran into the target directory
    Completed {
        target_dir: PathBuf,
        summary: CrawlSummary,
    },
}

/// Absolute target directory for `query` under `output_dir`
pub fn target_dir(output_dir: &Path, query: &str) -> Result<PathBuf> {
    let dir = output_dir.join(sanitize_filename::sanitize(query));
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(dir))
}

async fn target_exists(target: &Path) -> Result<bool> {
    tokio::fs::try_exists(target)
        .await
        .with_context(|| format!("Failed to check target directory {}", target.display()))
}

/// Download up to `options.limit` images for `query`
///
/// Errors only on directory handling and configuration problems. A crawl that
/// saves fewer images than requested still completes successfully.
pub async fn download(query: &str, options: DownloadOptions) -> Result<DownloadOutcome> {
    if query.trim().is_empty() {
        anyhow::bail!("Search query cannot be empty or whitespace-only");
    }
    let target = target_dir(&options.output_dir, query.trim())?;

    if options.force_replace && target_exists(&target).await? {
        tokio::fs::remove_dir_all(&target)
            .await
            .with_context(|| format!("Failed to remove {}", target.display()))?;
    }

    if target_exists(&target).await? {
        if options.verbose {
            info!(dir = %target.display(), "Directory already exists, skipping download");
        }
        return Ok(DownloadOutcome::Skipped(target));
    }

    tokio::fs::create_dir_all(&target)
        .await
        .with_context(|| format!("Failed to create directory {}", target.display()))?;

    info!(dir = %target.display(), "Downloading images");

    let mut builder = RunConfig::builder()
        .output_dir(&target)
        .query(query)
        .limit(options.limit)
        .adult_filter_off(options.adult_filter_off)
        .timeout_secs(options.timeout_secs)
        .resize(options.resize)
        .verbose(options.verbose)
        .search_endpoint(options.search_endpoint)
        .filter_shorthand(options.filter);
    if let Some(country) = options.country {
        builder = builder.country(country);
    }
    if let Some(theme) = options.theme {
        builder = builder.theme(theme);
    }
    let config = builder.build()?;

    let crawler = ImageCrawler::new(config)?;
    let summary = crawler.run().await;

    Ok(DownloadOutcome::Completed {
        target_dir: target,
        summary,
    })
}

//! HTTP-backed image crawler

use anyhow::{Context, Result};
use reqwest::Client;

use super::crawl_types::CrawlSummary;
use super::orchestrator::crawl_pages;
use super::progress::{LoggingProgress, ProgressReporter};
use crate::acquirer::{AcquirerConfig, ImageAcquirer};
use crate::config::RunConfig;
use crate::image_search::{HttpPageSource, browser_headers};

/// Crawls the search endpoint and saves images to disk
///
/// Page fetches and image downloads share one HTTP client that carries the
/// browser headers.
#[derive(Debug, Clone)]
pub struct ImageCrawler {
    config: RunConfig,
    source: HttpPageSource,
    acquirer: ImageAcquirer,
}

impl ImageCrawler {
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()
            .context("Failed to build HTTP client")?;

        let source = HttpPageSource::new(
            client.clone(),
            config.search_endpoint(),
            config.timeout(),
        );
        let acquirer = ImageAcquirer::new(client, AcquirerConfig::from(&config));

        Ok(Self {
            config,
            source,
            acquirer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the crawl, logging progress according to the verbose flag
    pub async fn run(&self) -> CrawlSummary {
        let progress = LoggingProgress::new(self.config.verbose());
        self.run_with_progress(&progress).await
    }

    pub async fn run_with_progress<P: ProgressReporter>(&self, progress: &P) -> CrawlSummary {
        crawl_pages(&self.config, &self.source, &self.acquirer, progress).await
    }
}

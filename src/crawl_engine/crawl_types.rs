//! Core types for image crawl runs.
//!
//! `CrawlState` is the single-owner mutable state of one run; `CrawlSummary`
//! is what a run hands back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::image_search::ImageMetadata;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// `limit` successful downloads reached
    LimitReached,
    /// The absolute page cap was reached first
    PageCapReached,
    /// The endpoint returned an empty page body
    NoMoreResults,
    /// A result page could not be fetched
    PageFetchFailed,
}

/// Mutable state of one run, owned by the crawl loop
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Every URL ever handed to the acquirer this run. Only grows.
    pub(crate) seen: HashSet<String>,
    /// Successful saves so far
    pub(crate) download_count: usize,
    /// Zero-based page cursor
    pub(crate) page_index: usize,
    /// Successfully saved images, in completion order
    pub(crate) collected: Vec<ImageMetadata>,
}

impl CrawlState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as seen; returns `false` if it already was
    pub(crate) fn mark_seen(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string())
    }

    #[must_use]
    pub fn has_seen(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    #[must_use]
    pub fn download_count(&self) -> usize {
        self.download_count
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub(crate) fn record_success(&mut self, metadata: ImageMetadata) {
        self.download_count += 1;
        self.collected.push(metadata);
    }

    pub(crate) fn advance_page(&mut self) {
        self.page_index += 1;
    }

    pub(crate) fn into_summary(self, stop_reason: StopReason) -> CrawlSummary {
        CrawlSummary {
            images: self.collected,
            pages_crawled: self.page_index,
            urls_seen: self.seen.len(),
            stop_reason,
        }
    }
}

/// Outcome of one run
///
/// Partial results are a normal outcome: `images` holds whatever was saved
/// before the run stopped, whatever the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    /// Saved images in completion order
    pub images: Vec<ImageMetadata>,
    /// Result pages fully processed
    pub pages_crawled: usize,
    /// Distinct image URLs attempted
    pub urls_seen: usize,
    pub stop_reason: StopReason,
}

impl CrawlSummary {
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.images.len()
    }
}

//! Main crawl orchestration logic
//!
//! Runs the bounded pagination loop:
//! - fetch result pages in increasing page order
//! - extract candidates and drop URLs already seen this run
//! - acquire each new candidate, one at a time
//! - stop on the download limit, the page cap, or the end of results

use tracing::{debug, info};

use super::crawl_types::{CrawlState, CrawlSummary, StopReason};
use super::progress::ProgressReporter;
use crate::acquirer::{Acquire, with_local_path};
use crate::config::RunConfig;
use crate::image_search::{ImageRecord, PageSource, extract_images};
use crate::utils::MAX_PAGES;

/// Outcome of processing one result page
enum PageOutcome {
    Processed,
    Stop(StopReason),
}

/// Run one crawl from page 0 until a stop condition holds
///
/// The loop continues while fewer than `limit` images were saved and fewer
/// than `MAX_PAGES` pages were processed. An empty page body or a failed page
/// fetch ends the run early. A non-empty page with no extractable images does
/// not end it; the cursor just moves on.
///
/// Per-image failures never abort the run. The failed URL stays marked as seen
/// and does not count toward the limit.
///
/// # Arguments
/// * `config` - Run configuration
/// * `source` - Provider of result page markup
/// * `acquirer` - Downloads and saves one image
/// * `progress` - Progress reporter (`NoOpProgress` or `LoggingProgress`)
pub async fn crawl_pages<S, A, P>(
    config: &RunConfig,
    source: &S,
    acquirer: &A,
    progress: &P,
) -> CrawlSummary
where
    S: PageSource,
    A: Acquire,
    P: ProgressReporter,
{
    let mut state = CrawlState::new();
    let limit = config.limit();

    info!(
        query = config.query(),
        limit,
        country = config.country(),
        theme = config.theme(),
        "Starting image crawl"
    );

    let stop_reason = loop {
        if state.download_count >= limit {
            break StopReason::LimitReached;
        }
        if state.page_index >= MAX_PAGES {
            break StopReason::PageCapReached;
        }

        match crawl_page(config, source, acquirer, progress, &mut state).await {
            PageOutcome::Processed => state.advance_page(),
            PageOutcome::Stop(reason) => break reason,
        }
    };

    progress.report_completed(state.download_count, stop_reason);
    state.into_summary(stop_reason)
}

/// Fetch, extract and acquire one page at `state.page_index`
async fn crawl_page<S, A, P>(
    config: &RunConfig,
    source: &S,
    acquirer: &A,
    progress: &P,
    state: &mut CrawlState,
) -> PageOutcome
where
    S: PageSource,
    A: Acquire,
    P: ProgressReporter,
{
    let request = config.page_request(state.page_index);

    let markup = match source.fetch_page(&request).await {
        Ok(markup) => markup,
        Err(e) => {
            progress.report_page_failed(&e);
            return PageOutcome::Stop(StopReason::PageFetchFailed);
        }
    };

    if markup.is_empty() {
        info!(page_index = state.page_index, "No more images are available");
        return PageOutcome::Stop(StopReason::NoMoreResults);
    }

    let candidates = extract_images(&markup);
    progress.report_page_indexed(state.page_index + 1, candidates.len());

    let scope = config.scope_tags();
    for extracted in candidates {
        if state.download_count >= config.limit() {
            debug!(url = %extracted.image_url, "Limit reached, skipping rest of page");
            continue;
        }
        if !state.mark_seen(&extracted.image_url) {
            debug!(url = %extracted.image_url, "Skipping duplicate image");
            continue;
        }

        let record = ImageRecord::from_extracted(extracted, &scope);
        acquire_one(acquirer, progress, state, record).await;
    }

    PageOutcome::Processed
}

/// Acquire one new record and fold the result into `state`
async fn acquire_one<A, P>(acquirer: &A, progress: &P, state: &mut CrawlState, record: ImageRecord)
where
    A: Acquire,
    P: ProgressReporter,
{
    let ordinal = state.download_count + 1;
    progress.report_download_started(ordinal, &record.image_url);

    match acquirer.acquire(&record).await {
        Ok(saved) => {
            progress.report_download_completed(ordinal, &saved.image_path);
            state.record_success(with_local_path(&record, &saved.image_path));
        }
        Err(e) => progress.report_download_failed(&record.image_url, &e),
    }
}

//! Progress reporting abstraction for crawl runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting and
//! provides a no-op and a tracing-backed implementation.

use std::path::Path;
use tracing::{debug, info, warn};

use super::crawl_types::StopReason;
use crate::acquirer::AcquisitionError;
use crate::image_search::PageFetchError;

/// Trait for reporting crawl progress at key lifecycle events
///
/// Implementations can send updates to channels, log, update a UI, etc.
pub trait ProgressReporter: Send + Sync {
    /// A result page was fetched and `candidates` images were extracted from it
    fn report_page_indexed(&self, page_number: usize, candidates: usize);

    /// Acquisition of image number `ordinal` (1-based) has started
    fn report_download_started(&self, ordinal: usize, url: &str);

    /// Image number `ordinal` was saved
    fn report_download_completed(&self, ordinal: usize, path: &Path);

    /// Acquisition of `url` failed; the URL is abandoned for this run
    fn report_download_failed(&self, url: &str, error: &AcquisitionError);

    /// A result page could not be fetched; the run ends
    fn report_page_failed(&self, error: &PageFetchError);

    /// The run ended
    fn report_completed(&self, downloaded: usize, stop_reason: StopReason);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_page_indexed(&self, _page_number: usize, _candidates: usize) {}

    #[inline(always)]
    fn report_download_started(&self, _ordinal: usize, _url: &str) {}

    #[inline(always)]
    fn report_download_completed(&self, _ordinal: usize, _path: &Path) {}

    #[inline(always)]
    fn report_download_failed(&self, _url: &str, _error: &AcquisitionError) {}

    #[inline(always)]
    fn report_page_failed(&self, _error: &PageFetchError) {}

    #[inline(always)]
    fn report_completed(&self, _downloaded: usize, _stop_reason: StopReason) {}
}

/// Progress reporter that logs through `tracing`
///
/// With `verbose` off, page and per-image lines drop to debug level.
/// Failures and the final summary are always logged.
#[derive(Debug, Clone, Copy)]
pub struct LoggingProgress {
    verbose: bool,
}

impl LoggingProgress {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

macro_rules! progress_log {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

impl ProgressReporter for LoggingProgress {
    fn report_page_indexed(&self, page_number: usize, candidates: usize) {
        progress_log!(self.verbose, page = page_number, candidates, "Indexed {candidates} images on page {page_number}");
    }

    fn report_download_started(&self, ordinal: usize, url: &str) {
        progress_log!(self.verbose, ordinal, url, "Downloading image #{ordinal}");
    }

    fn report_download_completed(&self, ordinal: usize, path: &Path) {
        progress_log!(self.verbose, ordinal, path = %path.display(), "Image downloaded");
    }

    fn report_download_failed(&self, url: &str, error: &AcquisitionError) {
        warn!(url, kind = ?error.kind(), error = %error, "Issue getting image");
    }

    fn report_page_failed(&self, error: &PageFetchError) {
        warn!(error = %error, "Result page unavailable, no more images");
    }

    fn report_completed(&self, downloaded: usize, stop_reason: StopReason) {
        info!(downloaded, ?stop_reason, "Done. Downloaded {downloaded} images");
    }
}

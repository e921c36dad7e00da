pub mod acquirer;
pub mod config;
pub mod crawl_engine;
pub mod downloader;
pub mod image_search;
pub mod utils;

pub use acquirer::{
    Acquire, AcquirerConfig, AcquisitionError, AcquisitionErrorKind, ImageAcquirer, SavedImage,
};
pub use config::RunConfig;
pub use crawl_engine::{
    CrawlState, CrawlSummary, ImageCrawler, LoggingProgress, NoOpProgress, ProgressReporter,
    StopReason, crawl_pages,
};
pub use downloader::{DownloadOptions, DownloadOutcome, download};
pub use image_search::{
    ExtractedImage, FilterShorthand, HttpPageSource, ImageMetadata, ImageRecord, PageFetchError,
    PageRequest, PageSource, ScopeTags, extract_images,
};

/// Crawl with `config` and return what was saved
pub async fn crawl(config: RunConfig) -> anyhow::Result<CrawlSummary> {
    let crawler = ImageCrawler::new(config)?;
    Ok(crawler.run().await)
}

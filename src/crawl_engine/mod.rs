//! Crawl Engine Module
//!
//! Drives pagination over result pages, deduplicates image URLs across the
//! run, hands new candidates to the acquirer and enforces the stop policy.

// Sub-modules
pub mod crawl_types;
pub mod crawler;
pub mod orchestrator;
pub mod progress;

// Re-exports for public API
pub use crawl_types::{CrawlState, CrawlSummary, StopReason};
pub use crawler::ImageCrawler;
pub use orchestrator::crawl_pages;
pub use progress::{LoggingProgress, NoOpProgress, ProgressReporter};
